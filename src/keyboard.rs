//! Single keyboard dispatch for the whole page.
//!
//! Overlays compete for the same keys, so routing is one pure function over
//! what is currently open instead of a listener per controller.

/// Keys the page reacts to, parsed from `KeyboardEvent.key`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other,
}

impl Key {
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }
}

/// What a key press should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    CloseLightbox,
    PrevImage,
    NextImage,
    /// Open the lightbox at this gallery index; the default action is
    /// suppressed so Space does not scroll.
    OpenLightbox(usize),
    CloseMenu,
    /// Swallowed by an open lightbox.
    Consumed,
    Ignore,
}

/// Route `key`. An open lightbox takes precedence over everything else.
///
/// `gallery_index` is the index of the focused gallery item, if the key was
/// pressed on one.
pub fn route(
    key: Key,
    lightbox_open: bool,
    menu_open: bool,
    gallery_index: Option<usize>,
) -> KeyRoute {
    if lightbox_open {
        return match key {
            Key::Escape => KeyRoute::CloseLightbox,
            Key::ArrowLeft => KeyRoute::PrevImage,
            Key::ArrowRight => KeyRoute::NextImage,
            _ => KeyRoute::Consumed,
        };
    }
    match (key, gallery_index) {
        (Key::Enter | Key::Space, Some(index)) => KeyRoute::OpenLightbox(index),
        (Key::Escape, _) if menu_open => KeyRoute::CloseMenu,
        _ => KeyRoute::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Esc"), Key::Escape);
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("Right"), Key::ArrowRight);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Spacebar"), Key::Space);
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom("a"), Key::Other);
        assert_eq!(Key::from_dom("Tab"), Key::Other);
    }

    // === Lightbox open ===

    #[test]
    fn test_open_lightbox_owns_navigation_keys() {
        assert_eq!(route(Key::Escape, true, true, None), KeyRoute::CloseLightbox);
        assert_eq!(route(Key::ArrowLeft, true, false, None), KeyRoute::PrevImage);
        assert_eq!(route(Key::ArrowRight, true, false, None), KeyRoute::NextImage);
    }

    #[test]
    fn test_open_lightbox_swallows_other_keys() {
        assert_eq!(route(Key::Enter, true, false, Some(1)), KeyRoute::Consumed);
        assert_eq!(route(Key::Other, true, true, None), KeyRoute::Consumed);
    }

    // === Lightbox closed ===

    #[test]
    fn test_arrows_ignored_while_closed() {
        assert_eq!(route(Key::ArrowLeft, false, false, None), KeyRoute::Ignore);
        assert_eq!(route(Key::ArrowRight, false, true, None), KeyRoute::Ignore);
    }

    #[test]
    fn test_enter_or_space_on_gallery_item_opens() {
        assert_eq!(route(Key::Enter, false, false, Some(2)), KeyRoute::OpenLightbox(2));
        assert_eq!(route(Key::Space, false, true, Some(0)), KeyRoute::OpenLightbox(0));
        assert_eq!(route(Key::Enter, false, false, None), KeyRoute::Ignore);
    }

    #[test]
    fn test_escape_closes_menu_only_when_open() {
        assert_eq!(route(Key::Escape, false, true, None), KeyRoute::CloseMenu);
        assert_eq!(route(Key::Escape, false, false, None), KeyRoute::Ignore);
        assert_eq!(route(Key::Escape, false, true, Some(1)), KeyRoute::CloseMenu);
    }
}
