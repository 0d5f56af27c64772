use std::rc::Rc;

use crate::dom::{Dom, DomResult};
use crate::markup::{
    GALLERY_ITEM_CLASS, IMAGE_ALT_DATA, IMAGE_SOURCE_DATA, LIGHTBOX_CLOSE_ID, LIGHTBOX_ID,
    LIGHTBOX_IMAGE_ID, LIGHTBOX_NEXT_ID, LIGHTBOX_PREV_ID,
};

/// One image of the gallery, read once from the item's data attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub image_source: String,
    pub alt_text: String,
}

/// Lightbox position. `current_index` is only meaningful while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub current_index: usize,
    pub is_open: bool,
}

/// Full-screen viewer cycling through the gallery
pub struct LightboxController<D: Dom> {
    dom: Rc<D>,
    items: Vec<D::Node>,
    entries: Vec<GalleryEntry>,
    overlay: D::Node,
    image: D::Node,
    close_button: D::Node,
    prev_button: D::Node,
    next_button: D::Node,
    state: LightboxState,
}

impl<D: Dom> LightboxController<D> {
    /// Read the gallery and make every item a focusable button.
    pub fn mount(dom: Rc<D>) -> DomResult<Self> {
        let overlay = dom.element_by_id_or_err(LIGHTBOX_ID)?;
        let image = dom.element_by_id_or_err(LIGHTBOX_IMAGE_ID)?;
        let close_button = dom.element_by_id_or_err(LIGHTBOX_CLOSE_ID)?;
        let prev_button = dom.element_by_id_or_err(LIGHTBOX_PREV_ID)?;
        let next_button = dom.element_by_id_or_err(LIGHTBOX_NEXT_ID)?;

        let items = dom.query_class(&dom.body(), GALLERY_ITEM_CLASS);
        let entries = items
            .iter()
            .map(|item| {
                dom.set_attribute(item, "tabindex", "0");
                dom.set_attribute(item, "role", "button");
                GalleryEntry {
                    image_source: dom.data(item, IMAGE_SOURCE_DATA).unwrap_or_default(),
                    alt_text: dom.data(item, IMAGE_ALT_DATA).unwrap_or_default(),
                }
            })
            .collect::<Vec<_>>();
        if entries.is_empty() {
            tracing::warn!("Gallery is empty, lightbox navigation disabled");
        }

        Ok(Self {
            dom,
            items,
            entries,
            overlay,
            image,
            close_button,
            prev_button,
            next_button,
            state: LightboxState::default(),
        })
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Index of the gallery item `node` is.
    pub fn item_index(&self, node: &D::Node) -> Option<usize> {
        self.items.iter().position(|item| item == node)
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.entries.len() {
            tracing::warn!(index, len = self.entries.len(), "Lightbox index out of range");
            return;
        }
        self.state = LightboxState {
            current_index: index,
            is_open: true,
        };
        self.show_current();
        self.dom.set_hidden(&self.overlay, false);
        self.dom.lock_scroll();
        self.dom.focus(&self.close_button);
        tracing::debug!(index, "Lightbox opened");
    }

    /// Safe to call when already closed; leaves the scroll lock alone then.
    pub fn close(&mut self) {
        if !self.state.is_open {
            return;
        }
        self.state.is_open = false;
        self.dom.set_hidden(&self.overlay, true);
        self.dom.unlock_scroll();
        tracing::debug!("Lightbox closed");
    }

    pub fn prev(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.state.current_index = (self.state.current_index + len - 1) % len;
        self.show_current();
    }

    pub fn next(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.state.current_index = (self.state.current_index + 1) % len;
        self.show_current();
    }

    /// Route a click. `node` is the element being resolved, `target` the one
    /// actually clicked; the backdrop only reacts to clicks on itself.
    pub fn handle_click(&mut self, node: &D::Node, target: &D::Node) -> bool {
        if let Some(index) = self.item_index(node) {
            self.open(index);
        } else if *node == self.close_button {
            self.close();
        } else if *node == self.prev_button {
            self.prev();
        } else if *node == self.next_button {
            self.next();
        } else if *node == self.overlay && *target == self.overlay {
            self.close();
        } else {
            return false;
        }
        true
    }

    fn show_current(&self) {
        if let Some(entry) = self.entries.get(self.state.current_index) {
            self.dom.set_attribute(&self.image, "src", &entry.image_source);
            self.dom.set_attribute(&self.image, "alt", &entry.alt_text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDom, NodeId};
    use crate::test_support::{cafe_page, Page, GALLERY};

    fn mounted() -> (Page, LightboxController<MemoryDom>) {
        let page = cafe_page();
        let lightbox = LightboxController::mount(page.dom.clone()).unwrap();
        (page, lightbox)
    }

    fn shown_src(page: &Page) -> Option<String> {
        page.dom.attribute(&page.lightbox_image, "src")
    }

    // === Mounting ===

    #[test]
    fn test_mount_reads_gallery_in_order() {
        let (_page, lightbox) = mounted();
        let expected: Vec<GalleryEntry> = GALLERY
            .iter()
            .map(|(src, alt)| GalleryEntry {
                image_source: src.to_string(),
                alt_text: alt.to_string(),
            })
            .collect();
        assert_eq!(lightbox.entries(), expected.as_slice());
        assert_eq!(lightbox.state(), LightboxState::default());
    }

    #[test]
    fn test_items_become_focusable_buttons() {
        let (page, _lightbox) = mounted();
        for item in &page.gallery_items {
            assert_eq!(page.dom.attribute(item, "tabindex").as_deref(), Some("0"));
            assert_eq!(page.dom.attribute(item, "role").as_deref(), Some("button"));
        }
    }

    #[test]
    fn test_mount_without_overlay_fails() {
        let dom = Rc::new(MemoryDom::new());
        assert!(LightboxController::mount(dom).is_err());
    }

    // === Open / close ===

    #[test]
    fn test_open_shows_entry_and_focuses_close() {
        let (page, mut lightbox) = mounted();
        lightbox.open(1);

        assert!(lightbox.is_open());
        assert_eq!(lightbox.state().current_index, 1);
        assert_eq!(shown_src(&page).as_deref(), Some("img/bun-maska.jpg"));
        assert_eq!(
            page.dom.attribute(&page.lightbox_image, "alt").as_deref(),
            Some("Bun maska")
        );
        assert!(!page.dom.is_hidden(&page.lightbox));
        assert!(page.dom.is_scroll_locked());
        assert_eq!(page.dom.focused(), Some(page.lightbox_close));
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let (page, mut lightbox) = mounted();
        lightbox.open(3);
        assert!(!lightbox.is_open());
        assert!(page.dom.is_hidden(&page.lightbox));
    }

    #[test]
    fn test_close_is_idempotent() {
        let (page, mut lightbox) = mounted();
        lightbox.open(0);
        lightbox.close();
        lightbox.close();

        assert!(!lightbox.is_open());
        assert!(page.dom.is_hidden(&page.lightbox));
        assert!(!page.dom.is_scroll_locked());
    }

    #[test]
    fn test_close_when_closed_keeps_foreign_scroll_lock() {
        let (page, mut lightbox) = mounted();
        page.dom.lock_scroll();
        lightbox.close();
        assert!(page.dom.is_scroll_locked());
    }

    // === Navigation ===

    #[test]
    fn test_next_and_prev_wrap() {
        let (page, mut lightbox) = mounted();
        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.state().current_index, 0);
        assert_eq!(shown_src(&page).as_deref(), Some("img/chai.jpg"));

        lightbox.prev();
        assert_eq!(lightbox.state().current_index, 2);
        assert_eq!(shown_src(&page).as_deref(), Some("img/interior.jpg"));
    }

    #[test]
    fn test_index_stays_in_range_and_returns_home() {
        let (_page, mut lightbox) = mounted();
        let len = lightbox.entries().len();
        for start in 0..len {
            for steps in [0, 1, 2, 3, 7, 10] {
                lightbox.open(start);
                for _ in 0..steps {
                    lightbox.next();
                    assert!(lightbox.state().current_index < len);
                }
                for _ in 0..steps {
                    lightbox.prev();
                    assert!(lightbox.state().current_index < len);
                }
                assert_eq!(lightbox.state().current_index, start);
            }
        }
    }

    #[test]
    fn test_empty_gallery_navigation_is_noop() {
        let page = cafe_page();
        for item in &page.gallery_items {
            page.dom.remove(item);
        }
        let mut lightbox = LightboxController::mount(page.dom.clone()).unwrap();
        lightbox.open(0);
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.state(), LightboxState::default());
        assert_eq!(shown_src(&page), None);
    }

    // === Clicks ===

    #[test]
    fn test_click_routing() {
        let (page, mut lightbox) = mounted();

        assert!(lightbox.handle_click(&page.gallery_items[1], &page.gallery_images[1]));
        assert_eq!(lightbox.state().current_index, 1);

        assert!(lightbox.handle_click(&page.lightbox_next, &page.lightbox_next));
        assert_eq!(lightbox.state().current_index, 2);
        assert!(lightbox.handle_click(&page.lightbox_prev, &page.lightbox_prev));
        assert_eq!(lightbox.state().current_index, 1);

        assert!(lightbox.handle_click(&page.lightbox_close, &page.lightbox_close));
        assert!(!lightbox.is_open());

        assert!(!lightbox.handle_click(&page.hero, &page.hero));
    }

    #[test]
    fn test_backdrop_closes_but_image_does_not() {
        let (page, mut lightbox) = mounted();
        lightbox.open(0);

        // A click on the image bubbles to the backdrop but must not close it.
        assert!(!lightbox.handle_click(&page.lightbox, &page.lightbox_image));
        assert!(lightbox.is_open());

        assert!(lightbox.handle_click(&page.lightbox, &page.lightbox));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_item_index() {
        let (page, lightbox) = mounted();
        assert_eq!(lightbox.item_index(&page.gallery_items[2]), Some(2));
        assert_eq!(lightbox.item_index(&NodeId::BODY), None);
    }
}
