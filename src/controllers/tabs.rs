use std::rc::Rc;

use crate::dom::Dom;
use crate::markup::{tab_panel_id, ACTIVE_CLASS, TAB_BUTTON_CLASS, TAB_PANEL_CLASS, TAB_TARGET_DATA};

/// Which tab is active, by its `data-tab` id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSelection {
    pub active_tab_id: Option<String>,
}

/// Menu tabs: one button/panel pair active at a time
pub struct TabController<D: Dom> {
    dom: Rc<D>,
    buttons: Vec<D::Node>,
    panels: Vec<D::Node>,
    selection: TabSelection,
}

impl<D: Dom> TabController<D> {
    /// Collect the tab buttons and panels. The initially active tab is taken
    /// from the markup as-is.
    pub fn mount(dom: Rc<D>) -> Self {
        let body = dom.body();
        let buttons = dom.query_class(&body, TAB_BUTTON_CLASS);
        let panels = dom.query_class(&body, TAB_PANEL_CLASS);
        let active_tab_id = buttons
            .iter()
            .find(|button| dom.has_class(button, ACTIVE_CLASS))
            .and_then(|button| dom.data(button, TAB_TARGET_DATA));
        tracing::debug!(
            buttons = buttons.len(),
            panels = panels.len(),
            ?active_tab_id,
            "Tabs mounted"
        );
        Self {
            dom,
            buttons,
            panels,
            selection: TabSelection { active_tab_id },
        }
    }

    pub fn selection(&self) -> &TabSelection {
        &self.selection
    }

    /// Tab id targeted by `node` when it is one of the tab buttons.
    pub fn tab_for(&self, node: &D::Node) -> Option<String> {
        if !self.buttons.contains(node) {
            return None;
        }
        Some(self.dom.data(node, TAB_TARGET_DATA).unwrap_or_default())
    }

    /// Activate the tab whose button targets `tab_id` and return the panel
    /// that became visible.
    ///
    /// With no `tab-{id}` panel the button still turns active and every panel
    /// stays hidden.
    pub fn select_tab(&mut self, tab_id: &str) -> Option<D::Node> {
        let button = self
            .buttons
            .iter()
            .find(|button| self.dom.data(button, TAB_TARGET_DATA).as_deref() == Some(tab_id))
            .cloned();
        self.activate(button.as_ref(), tab_id)
    }

    /// Activate the clicked `button` itself, whatever its `data-tab` says.
    ///
    /// A button without `data-tab` targets the empty id, which has no panel.
    pub fn select_button(&mut self, button: &D::Node) -> Option<D::Node> {
        let tab_id = self.tab_for(button)?;
        self.activate(Some(button), &tab_id)
    }

    fn activate(&mut self, button: Option<&D::Node>, tab_id: &str) -> Option<D::Node> {
        for other in &self.buttons {
            self.dom.remove_class(other, ACTIVE_CLASS);
            self.dom.set_attribute(other, "aria-selected", "false");
        }
        for panel in &self.panels {
            self.dom.remove_class(panel, ACTIVE_CLASS);
            self.dom.set_hidden(panel, true);
        }

        if let Some(button) = button {
            self.dom.add_class(button, ACTIVE_CLASS);
            self.dom.set_attribute(button, "aria-selected", "true");
        }
        self.selection.active_tab_id = Some(tab_id.to_string());

        if tab_id.is_empty() {
            tracing::debug!("Tab button has no target");
            return None;
        }
        let Some(panel) = self.dom.element_by_id(&tab_panel_id(tab_id)) else {
            tracing::debug!(tab_id, "No panel for tab");
            return None;
        };
        self.dom.add_class(&panel, ACTIVE_CLASS);
        self.dom.set_hidden(&panel, false);
        tracing::debug!(tab_id, "Tab selected");
        Some(panel)
    }

    /// Panels currently marked active.
    pub fn active_panels(&self) -> Vec<D::Node> {
        self.panels
            .iter()
            .filter(|panel| self.dom.has_class(panel, ACTIVE_CLASS))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::test_support::{cafe_page, Page};

    fn mounted() -> (Page, TabController<MemoryDom>) {
        let page = cafe_page();
        let tabs = TabController::mount(page.dom.clone());
        (page, tabs)
    }

    fn selected(page: &Page, button: usize) -> bool {
        page.dom
            .attribute(&page.tab_buttons[button], "aria-selected")
            .as_deref()
            == Some("true")
    }

    #[test]
    fn test_initial_selection_from_markup() {
        let (_page, tabs) = mounted();
        assert_eq!(tabs.selection().active_tab_id.as_deref(), Some("coffee"));
    }

    #[test]
    fn test_tab_for_buttons_only() {
        let (page, tabs) = mounted();
        assert_eq!(tabs.tab_for(&page.tab_buttons[1]).as_deref(), Some("tea"));
        assert_eq!(tabs.tab_for(&page.coffee_panel), None);
    }

    #[test]
    fn test_select_valid_tab() {
        let (page, mut tabs) = mounted();
        let shown = tabs.select_tab("tea");

        assert_eq!(shown, Some(page.tea_panel));
        assert_eq!(tabs.active_panels(), vec![page.tea_panel]);
        assert!(!page.dom.is_hidden(&page.tea_panel));
        assert!(page.dom.is_hidden(&page.coffee_panel));
        assert!(!page.dom.has_class(&page.coffee_panel, ACTIVE_CLASS));
        assert!(selected(&page, 1));
        assert!(!selected(&page, 0));
        assert!(page.dom.has_class(&page.tab_buttons[1], ACTIVE_CLASS));
        assert!(!page.dom.has_class(&page.tab_buttons[0], ACTIVE_CLASS));
    }

    #[test]
    fn test_select_tab_without_panel() {
        let (page, mut tabs) = mounted();
        let shown = tabs.select_tab("pastries");

        assert_eq!(shown, None);
        assert!(tabs.active_panels().is_empty());
        assert!(page.dom.is_hidden(&page.coffee_panel));
        assert!(page.dom.is_hidden(&page.tea_panel));
        assert!(selected(&page, 2));
        assert_eq!(tabs.selection().active_tab_id.as_deref(), Some("pastries"));
    }

    #[test]
    fn test_select_button_without_target() {
        let page = cafe_page();
        let tab_bar = page.dom.parent(&page.tab_buttons[0]).unwrap();
        let bare = page.dom.append(&tab_bar, "button", &[("class", "tab-btn")]);
        let mut tabs = TabController::mount(page.dom.clone());

        assert_eq!(tabs.tab_for(&bare).as_deref(), Some(""));
        assert_eq!(tabs.select_button(&bare), None);

        assert!(page.dom.has_class(&bare, ACTIVE_CLASS));
        assert_eq!(
            page.dom.attribute(&bare, "aria-selected").as_deref(),
            Some("true")
        );
        assert!(tabs.active_panels().is_empty());
        assert!((0..3).all(|i| !selected(&page, i)));
    }

    #[test]
    fn test_select_button_activates_the_clicked_duplicate() {
        let page = cafe_page();
        let tab_bar = page.dom.parent(&page.tab_buttons[0]).unwrap();
        let twin = page.dom.append(
            &tab_bar,
            "button",
            &[("class", "tab-btn"), ("data-tab", "tea")],
        );
        let mut tabs = TabController::mount(page.dom.clone());

        assert_eq!(tabs.select_button(&twin), Some(page.tea_panel));
        assert!(page.dom.has_class(&twin, ACTIVE_CLASS));
        assert!(!selected(&page, 1));
    }

    #[test]
    fn test_select_button_ignores_other_nodes() {
        let (page, mut tabs) = mounted();
        assert_eq!(tabs.select_button(&page.tea_panel), None);
        assert!(selected(&page, 0));
        assert_eq!(tabs.active_panels(), vec![page.coffee_panel]);
    }

    #[test]
    fn test_at_most_one_active_panel_after_any_sequence() {
        let (page, mut tabs) = mounted();
        for tab_id in ["tea", "coffee", "pastries", "tea", "tea", "missing", "coffee"] {
            let shown = tabs.select_tab(tab_id);
            let active = tabs.active_panels();
            assert!(active.len() <= 1);
            assert_eq!(active.first().copied(), shown);
            let selected_count = (0..3).filter(|&i| selected(&page, i)).count();
            assert!(selected_count <= 1);
        }
        assert_eq!(tabs.active_panels(), vec![page.coffee_panel]);
    }
}
