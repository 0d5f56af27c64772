use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::dom::{Dom, DomError, DomResult};

pub(crate) fn js_error(operation: &str, value: JsValue) -> DomError {
    DomError::Operation(format!("{operation}: {value:?}"))
}

/// The live document
pub struct BrowserDom {
    window: Window,
    document: Document,
    body: Element,
}

impl BrowserDom {
    pub fn new(window: Window, document: Document) -> DomResult<Self> {
        let body = document
            .body()
            .map(Element::from)
            .ok_or_else(|| DomError::MissingElement("body".to_string()))?;
        Ok(Self {
            window,
            document,
            body,
        })
    }

    fn select(&self, root: &Element, selector: &str) -> Vec<Element> {
        let list = match root.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "Selector rejected");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn report(&self, operation: &str, result: Result<(), JsValue>) {
        if let Err(e) = result {
            tracing::warn!(error = %js_error(operation, e), "DOM write failed");
        }
    }
}

impl Dom for BrowserDom {
    type Node = Element;

    fn body(&self) -> Element {
        self.body.clone()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_class(&self, root: &Element, class: &str) -> Vec<Element> {
        self.select(root, &format!(".{class}"))
    }

    fn query_tag(&self, root: &Element, tag: &str) -> Vec<Element> {
        self.select(root, tag)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn create_element(&self, tag: &str) -> DomResult<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| js_error("createElement", e))
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        self.report("appendChild", parent.append_child(child).map(|_| ()));
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn add_class(&self, node: &Element, class: &str) {
        self.report("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&self, node: &Element, class: &str) {
        self.report("classList.remove", node.class_list().remove_1(class));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        self.report("setAttribute", node.set_attribute(name, value));
    }

    fn is_hidden(&self, node: &Element) -> bool {
        node.has_attribute("hidden")
    }

    fn set_hidden(&self, node: &Element, hidden: bool) {
        if hidden {
            self.set_attribute(node, "hidden", "");
        } else {
            self.report("removeAttribute", node.remove_attribute("hidden"));
        }
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        let element = node.dyn_ref::<HtmlElement>()?;
        element
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(element) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        if value.is_empty() {
            self.report("style.removeProperty", style.remove_property(property).map(|_| ()));
        } else {
            self.report("style.setProperty", style.set_property(property, value));
        }
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            node.get_attribute("value").unwrap_or_default()
        }
    }

    fn set_value(&self, node: &Element, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            self.set_attribute(node, "value", value);
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        node.has_attribute("disabled")
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.report("removeAttribute", node.remove_attribute("disabled"));
        }
    }

    fn focus(&self, node: &Element) {
        if let Some(element) = node.dyn_ref::<HtmlElement>() {
            self.report("focus", element.focus());
        }
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}
