//! Host integration points and the [`Document`] reference host.
//!
//! The engine never patches a host. A host instead exposes three seams:
//! an injectable [`ElementRewrite`] in its construction entry point, a
//! replaceable [`SelectorTransform`] in its style compiler, and a place to
//! insert stylesheets.

use std::sync::Arc;

use crate::context::RenderContext;
use crate::css::compiler::{SelectorTransform, StyleCompiler, StyleGroup};
use crate::dom::{Dom, NodeData, NodeId};
use crate::rewrite::attributes::Attributes;
use crate::rewrite::element::{construct, ElementRewrite};

/// The host's element construction primitive.
pub trait ElementFactory {
    type Element;

    fn create_element(
        &mut self,
        tag: &str,
        attributes: Attributes,
        children: Vec<Self::Element>,
    ) -> Self::Element;

    fn add_class(&mut self, element: &Self::Element, class: &str);
}

/// Installation points used by [`Rewriter::activate`](crate::rewrite::Rewriter::activate).
pub trait Host {
    /// Route every element construction through `rewrite`.
    fn install_element_rewrite(&mut self, rewrite: Arc<dyn ElementRewrite>);

    /// Compile every selector through `transform`.
    fn install_selector_transform(&mut self, transform: Arc<dyn SelectorTransform>);

    /// Insert a stylesheet ahead of all existing ones.
    fn insert_stylesheet(&mut self, css: String);
}

/// A minimal document: element tree, style compiler and stylesheet list.
#[derive(Default)]
pub struct Document {
    dom: Dom,
    compiler: StyleCompiler,
    stylesheets: Vec<String>,
    element_rewrite: Option<Arc<dyn ElementRewrite>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construction entry point. Goes through the installed element rewrite,
    /// if any, and always ends in the DOM's own factory.
    pub fn create_element(
        &mut self,
        tag: &str,
        attributes: Attributes,
        children: Vec<NodeId>,
        context: &RenderContext<'_>,
    ) -> NodeId {
        match &self.element_rewrite {
            Some(rewrite) => construct(
                rewrite.as_ref(),
                &mut self.dom,
                tag,
                attributes,
                children,
                context,
            ),
            None => self.dom.create_element(tag, attributes, children),
        }
    }

    /// Create a text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.dom.insert(NodeData::text(content))
    }

    /// Mount `element` as the document root.
    pub fn mount(&mut self, element: NodeId) {
        self.dom.set_root(element);
    }

    /// Compile `group` with the document's compiler and append the result as
    /// an author stylesheet.
    pub fn add_style(&mut self, group: &StyleGroup) {
        let css = self.compiler.compile(group);
        self.stylesheets.push(css);
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Stylesheets in cascade order.
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Whether an element rewrite is installed.
    pub fn has_element_rewrite(&self) -> bool {
        self.element_rewrite.is_some()
    }
}

impl Host for Document {
    fn install_element_rewrite(&mut self, rewrite: Arc<dyn ElementRewrite>) {
        self.element_rewrite = Some(rewrite);
    }

    fn install_selector_transform(&mut self, transform: Arc<dyn SelectorTransform>) {
        self.compiler.set_transform(transform);
    }

    fn insert_stylesheet(&mut self, css: String) {
        self.stylesheets.insert(0, css);
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.dom.len())
            .field("stylesheets", &self.stylesheets)
            .field("element_rewrite", &self.element_rewrite.is_some())
            .finish()
    }
}
