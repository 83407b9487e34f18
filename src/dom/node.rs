//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::rewrite::attributes::Attributes;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Data associated with a single DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Native tag name (e.g. "h1", "a"). Empty for text nodes.
    pub tag: String,
    /// Attributes in insertion order.
    pub attributes: Attributes,
    /// CSS classes (for .class selector).
    pub classes: Vec<String>,
    /// Content of a text node.
    pub text: Option<String>,
}

impl NodeData {
    /// Create an element node with the given tag and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            classes: Vec::new(),
            text: None,
        }
    }

    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: Attributes::new(),
            classes: Vec::new(),
            text: Some(content.into()),
        }
    }

    /// Whether this is a text node.
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Replace the attributes (builder).
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add a single CSS class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Check whether this node has a given CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a CSS class. No-op if already present or empty.
    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }
}
