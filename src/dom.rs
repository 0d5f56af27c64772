//! Document access used by every controller.
//!
//! Controllers never talk to a concrete DOM. They receive an `Rc<D: Dom>` and
//! the element handles they own at mount time, and only touch those. The
//! browser host implements this over `web-sys`; tests use [`MemoryDom`].

use std::fmt;
use thiserror::Error;

mod memory;
pub use memory::{MemoryDom, NodeId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("DOM operation failed: {0}")]
    Operation(String),
}

pub type DomResult<T> = Result<T, DomError>;

pub trait Dom {
    /// Cheap handle to a single element.
    type Node: Clone + PartialEq + fmt::Debug + 'static;

    fn body(&self) -> Self::Node;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// Descendants of `root` carrying `class`, in document order.
    fn query_class(&self, root: &Self::Node, class: &str) -> Vec<Self::Node>;
    /// Descendants of `root` with the given tag name, in document order.
    fn query_tag(&self, root: &Self::Node, tag: &str) -> Vec<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn create_element(&self, tag: &str) -> DomResult<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    /// Detach `node` from the tree. Detached nodes are ignored.
    fn remove(&self, node: &Self::Node);

    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn is_hidden(&self, node: &Self::Node) -> bool;
    fn set_hidden(&self, node: &Self::Node, hidden: bool);

    /// Inline style value, `None` when unset.
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    /// Set an inline style. An empty value clears the property.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Current value of a form control.
    fn value(&self, node: &Self::Node) -> String;
    fn set_value(&self, node: &Self::Node, value: &str);

    fn is_disabled(&self, node: &Self::Node) -> bool;
    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    fn focus(&self, node: &Self::Node);
    fn scroll_into_view(&self, node: &Self::Node);
    /// Vertical scroll offset of the page in CSS pixels.
    fn scroll_y(&self) -> f64;

    fn id(&self, node: &Self::Node) -> Option<String> {
        self.attribute(node, "id").filter(|id| !id.is_empty())
    }

    /// `data-*` attribute lookup, `key` without the prefix.
    fn data(&self, node: &Self::Node, key: &str) -> Option<String> {
        self.attribute(node, &format!("data-{key}"))
    }

    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    fn element_by_id_or_err(&self, id: &str) -> DomResult<Self::Node> {
        self.element_by_id(id)
            .ok_or_else(|| DomError::MissingElement(format!("#{id}")))
    }

    /// Disable page scrolling behind an overlay.
    fn lock_scroll(&self) {
        self.set_style(&self.body(), "overflow", "hidden");
    }

    fn unlock_scroll(&self) {
        self.set_style(&self.body(), "overflow", "");
    }

    fn is_scroll_locked(&self) -> bool {
        self.style(&self.body(), "overflow").as_deref() == Some("hidden")
    }
}
