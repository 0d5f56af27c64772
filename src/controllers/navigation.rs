use std::rc::Rc;

use crate::config::NavConfig;
use crate::dom::{Dom, DomResult};
use crate::markup::{
    HAMBURGER_ID, NAVBAR_ID, NAV_LINKS_ID, OPEN_CLASS, OVERLAY_CLASS, SCROLLED_CLASS,
};

/// Whether the mobile menu is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

/// Mobile menu toggle plus the solid-on-scroll navbar
pub struct NavigationController<D: Dom> {
    dom: Rc<D>,
    navbar: D::Node,
    toggle: D::Node,
    links: D::Node,
    overlay: D::Node,
    anchors: Vec<D::Node>,
    menu: MenuState,
    scroll_threshold: f64,
}

impl<D: Dom> NavigationController<D> {
    /// Look up the navbar, create the menu overlay and sync the scrolled
    /// state with the current scroll position.
    pub fn mount(dom: Rc<D>, config: &NavConfig) -> DomResult<Self> {
        let navbar = dom.element_by_id_or_err(NAVBAR_ID)?;
        let toggle = dom.element_by_id_or_err(HAMBURGER_ID)?;
        let links = dom.element_by_id_or_err(NAV_LINKS_ID)?;
        let anchors = dom.query_tag(&links, "a");

        let overlay = dom.create_element("div")?;
        dom.add_class(&overlay, OVERLAY_CLASS);
        dom.append_child(&dom.body(), &overlay);

        let controller = Self {
            dom,
            navbar,
            toggle,
            links,
            overlay,
            anchors,
            menu: MenuState::default(),
            scroll_threshold: config.scroll_threshold,
        };
        controller.on_scroll();
        tracing::debug!(
            links = controller.anchors.len(),
            threshold = controller.scroll_threshold,
            "Navigation mounted"
        );
        Ok(controller)
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open
    }

    pub fn overlay(&self) -> &D::Node {
        &self.overlay
    }

    pub fn toggle_menu(&mut self) {
        if self.menu.is_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    pub fn open_menu(&mut self) {
        self.menu.is_open = true;
        self.dom.add_class(&self.links, OPEN_CLASS);
        self.dom.add_class(&self.overlay, OPEN_CLASS);
        self.dom.add_class(&self.toggle, OPEN_CLASS);
        self.dom.set_attribute(&self.toggle, "aria-expanded", "true");
        self.dom.lock_scroll();
        tracing::debug!("Menu opened");
    }

    /// Safe to call when already closed.
    pub fn close_menu(&mut self) {
        let was_open = self.menu.is_open;
        self.menu.is_open = false;
        self.dom.remove_class(&self.links, OPEN_CLASS);
        self.dom.remove_class(&self.overlay, OPEN_CLASS);
        self.dom.remove_class(&self.toggle, OPEN_CLASS);
        self.dom.set_attribute(&self.toggle, "aria-expanded", "false");
        self.dom.unlock_scroll();
        if was_open {
            tracing::debug!("Menu closed");
        }
    }

    /// Class toggling only; runs on every scroll event.
    pub fn on_scroll(&self) {
        let scrolled = self.dom.scroll_y() > self.scroll_threshold;
        self.dom.toggle_class(&self.navbar, SCROLLED_CLASS, scrolled);
    }

    /// Route a click on `node`. Returns whether the menu owns it.
    pub fn handle_click(&mut self, node: &D::Node) -> bool {
        if *node == self.toggle {
            self.toggle_menu();
            true
        } else if *node == self.overlay || self.anchors.contains(node) {
            self.close_menu();
            true
        } else {
            false
        }
    }
}
