//! Identifiers, classes and attributes the page markup must carry.

// Element ids
pub const NAVBAR_ID: &str = "navbar";
pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMAGE_ID: &str = "lbImg";
pub const LIGHTBOX_CLOSE_ID: &str = "lbClose";
pub const LIGHTBOX_PREV_ID: &str = "lbPrev";
pub const LIGHTBOX_NEXT_ID: &str = "lbNext";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const MESSAGE_FIELD_ID: &str = "message";
pub const SITE_CONFIG_ID: &str = "site-config";

// Marker classes
pub const REVEAL_CLASS: &str = "reveal";
pub const TAB_BUTTON_CLASS: &str = "tab-btn";
pub const TAB_PANEL_CLASS: &str = "menu-panel";
pub const GALLERY_ITEM_CLASS: &str = "gallery-item";
pub const HERO_CONTENT_CLASS: &str = "hero-content";
pub const OVERLAY_CLASS: &str = "nav-overlay";
pub const FEEDBACK_CLASS: &str = "form-feedback";
pub const FEEDBACK_NOTE_CLASS: &str = "form-note";

// State classes
pub const OPEN_CLASS: &str = "open";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";

// Data attributes, without the `data-` prefix
pub const TAB_TARGET_DATA: &str = "tab";
pub const IMAGE_SOURCE_DATA: &str = "src";
pub const IMAGE_ALT_DATA: &str = "alt";

/// Panel id for a tab button's target, `tab-{id}`.
pub fn tab_panel_id(tab_id: &str) -> String {
    format!("tab-{tab_id}")
}
