use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Dom, DomResult};

/// Index of a node inside a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// The `<body>` element, always the first node.
    pub const BODY: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Headless document tree.
///
/// Nodes live in an arena and are never freed; `remove` only detaches them,
/// which is all a page-lifetime behavior layer needs. Also records focus and
/// scroll-into-view requests so tests can assert on them.
#[derive(Debug)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
    focused: Cell<Option<NodeId>>,
    scroll_y: Cell<f64>,
    scrolled_into_view: RefCell<Vec<NodeId>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            ..Default::default()
        };
        Self {
            nodes: RefCell::new(vec![body]),
            focused: Cell::new(None),
            scroll_y: Cell::new(0.0),
            scrolled_into_view: RefCell::new(Vec::new()),
        }
    }

    /// Create an element with the given attributes and append it to `parent`.
    ///
    /// `class` is split on whitespace; `hidden` and `disabled` are boolean
    /// attributes and only their presence matters.
    pub fn append(&self, parent: &NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let node = self.new_node(tag);
        for (name, value) in attributes {
            self.set_attribute(&node, name, value);
        }
        self.append_child(parent, &node);
        node
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.scrolled_into_view.borrow().clone()
    }

    pub fn is_attached(&self, node: &NodeId) -> bool {
        let mut current = *node;
        loop {
            if current == NodeId::BODY {
                return true;
            }
            match self.nodes.borrow()[current.index()].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Serialize `node` and its subtree. Used for debugging and assertions.
    pub fn outer_html(&self, node: &NodeId) -> String {
        let mut out = String::new();
        self.write_html(*node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let nodes = self.nodes.borrow();
        let data = &nodes[node.index()];
        out.push('<');
        out.push_str(&data.tag);
        if !data.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(
                &data.classes.join(" "),
            ));
            out.push('"');
        }
        for (name, value) in &data.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
        }
        if !data.styles.is_empty() {
            let style = data
                .styles
                .iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(" style=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(&style));
            out.push('"');
        }
        out.push('>');
        out.push_str(&html_escape::encode_text(&data.text));
        let children = data.children.clone();
        let tag = data.tag.clone();
        drop(nodes);
        for child in children {
            self.write_html(child, out);
        }
        out.push_str("</");
        out.push_str(&tag);
        out.push('>');
    }

    fn new_node(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len() as u32);
        nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        id
    }

    fn descendants(&self, root: &NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root.index()].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(nodes[node.index()].children.iter().rev().copied());
        }
        out
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn body(&self) -> NodeId {
        NodeId::BODY
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(&NodeId::BODY)
            .into_iter()
            .find(|node| self.attribute(node, "id").as_deref() == Some(id))
    }

    fn query_class(&self, root: &NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|node| self.has_class(node, class))
            .collect()
    }

    fn query_tag(&self, root: &NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        let nodes = self.nodes.borrow();
        self.descendants(root)
            .into_iter()
            .filter(|node| nodes[node.index()].tag == tag)
            .collect()
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.index()].parent
    }

    fn create_element(&self, tag: &str) -> DomResult<NodeId> {
        Ok(self.new_node(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        self.remove(child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[parent.index()].children.push(*child);
        nodes[child.index()].parent = Some(*parent);
    }

    fn remove(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[node.index()].parent.take() {
            nodes[parent.index()].children.retain(|child| child != node);
        }
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.index()].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.index()]
            .classes
            .retain(|c| c != class);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.index()]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        let data = &nodes[node.index()];
        if name == "class" {
            return (!data.classes.is_empty()).then(|| data.classes.join(" "));
        }
        data.attributes.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let data = &mut nodes[node.index()];
        if name == "class" {
            data.classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            data.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn is_hidden(&self, node: &NodeId) -> bool {
        self.nodes.borrow()[node.index()]
            .attributes
            .contains_key("hidden")
    }

    fn set_hidden(&self, node: &NodeId, hidden: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let attributes = &mut nodes[node.index()].attributes;
        if hidden {
            attributes.insert("hidden".to_string(), String::new());
        } else {
            attributes.remove("hidden");
        }
    }

    fn style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.index()]
            .styles
            .get(property)
            .cloned()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let styles = &mut nodes[node.index()].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn text(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.index()].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[node.index()].text = text.to_string();
    }

    fn value(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.index()].value.clone()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.nodes.borrow_mut()[node.index()].value = value.to_string();
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.nodes.borrow()[node.index()]
            .attributes
            .contains_key("disabled")
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let attributes = &mut nodes[node.index()].attributes;
        if disabled {
            attributes.insert("disabled".to_string(), String::new());
        } else {
            attributes.remove("disabled");
        }
    }

    fn focus(&self, node: &NodeId) {
        self.focused.set(Some(*node));
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.scrolled_into_view.borrow_mut().push(*node);
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MemoryDom, NodeId, NodeId, NodeId) {
        let dom = MemoryDom::new();
        let list = dom.append(&NodeId::BODY, "ul", &[("id", "list"), ("class", "cards")]);
        let first = dom.append(&list, "li", &[("class", "reveal card")]);
        let second = dom.append(&list, "li", &[("class", "reveal")]);
        (dom, list, first, second)
    }

    // === Tree queries ===

    #[test]
    fn test_element_by_id() {
        let (dom, list, _, _) = sample();
        assert_eq!(dom.element_by_id("list"), Some(list));
        assert_eq!(dom.element_by_id("missing"), None);
    }

    #[test]
    fn test_query_class_in_document_order() {
        let (dom, list, first, second) = sample();
        let nested = dom.append(&first, "span", &[("class", "reveal")]);

        assert_eq!(
            dom.query_class(&NodeId::BODY, "reveal"),
            vec![first, nested, second]
        );
        assert_eq!(dom.query_class(&list, "card"), vec![first]);
    }

    #[test]
    fn test_query_tag_is_case_insensitive() {
        let (dom, _, first, second) = sample();
        assert_eq!(dom.query_tag(&NodeId::BODY, "LI"), vec![first, second]);
    }

    #[test]
    fn test_removed_nodes_are_not_found() {
        let (dom, list, first, _) = sample();
        dom.remove(&list);

        assert!(!dom.is_attached(&first));
        assert_eq!(dom.element_by_id("list"), None);
        assert!(dom.query_class(&NodeId::BODY, "reveal").is_empty());
        // Removing again is harmless
        dom.remove(&list);
    }

    // === Element state ===

    #[test]
    fn test_class_attribute_round_trip() {
        let (dom, _, first, _) = sample();
        assert_eq!(dom.attribute(&first, "class").as_deref(), Some("reveal card"));

        dom.add_class(&first, "visible");
        dom.add_class(&first, "visible");
        dom.remove_class(&first, "card");
        assert_eq!(dom.attribute(&first, "class").as_deref(), Some("reveal visible"));
    }

    #[test]
    fn test_hidden_and_disabled_flags() {
        let dom = MemoryDom::new();
        let panel = dom.append(&NodeId::BODY, "div", &[("hidden", "")]);
        assert!(dom.is_hidden(&panel));
        dom.set_hidden(&panel, false);
        assert!(!dom.is_hidden(&panel));

        let button = dom.append(&NodeId::BODY, "button", &[]);
        dom.set_disabled(&button, true);
        assert!(dom.is_disabled(&button));
        dom.set_disabled(&button, false);
        assert!(!dom.is_disabled(&button));
    }

    #[test]
    fn test_empty_style_clears_property() {
        let dom = MemoryDom::new();
        dom.lock_scroll();
        assert!(dom.is_scroll_locked());
        dom.unlock_scroll();
        assert!(!dom.is_scroll_locked());
        assert_eq!(dom.style(&NodeId::BODY, "overflow"), None);
    }

    #[test]
    fn test_data_attribute_lookup() {
        let dom = MemoryDom::new();
        let item = dom.append(&NodeId::BODY, "figure", &[("data-src", "a.jpg")]);
        assert_eq!(dom.data(&item, "src").as_deref(), Some("a.jpg"));
        assert_eq!(dom.data(&item, "alt"), None);
    }

    // === Serialization ===

    #[test]
    fn test_outer_html_escapes_text_and_attributes() {
        let dom = MemoryDom::new();
        let note = dom.append(&NodeId::BODY, "p", &[("class", "form-feedback"), ("title", "\"x\"")]);
        dom.set_text(&note, "Tom & <Jerry>");

        assert_eq!(
            dom.outer_html(&note),
            "<p class=\"form-feedback\" title=\"&quot;x&quot;\">Tom &amp; &lt;Jerry&gt;</p>"
        );
    }
}
