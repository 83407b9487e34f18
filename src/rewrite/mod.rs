//! Rewriting engine: classification tables, tag resolution, class naming,
//! attribute rewrites, element construction.

pub mod attributes;
pub mod element;
pub mod link;
pub mod resolver;
pub mod tables;

pub use attributes::{Attributes, ValueTransform};
pub use element::{construct, ElementRewrite};
pub use link::LinkTarget;
pub use resolver::NameTransformer;
pub use tables::{AttributeRewrite, Classification, ClassificationTables, TableError};

use crate::context::RenderContext;

/// The engine: classification tables plus the name transformer derived from
/// them. Immutable once built.
#[derive(Debug, Clone)]
pub struct Rewriter {
    tables: ClassificationTables,
    names: NameTransformer,
}

impl Rewriter {
    pub fn new(tables: ClassificationTables) -> Self {
        let names = NameTransformer::from(&tables);
        Self { tables, names }
    }

    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    /// See [`ClassificationTables::resolve`].
    pub fn resolve<'a>(&'a self, tag: &'a str) -> &'a str {
        self.tables.resolve(tag)
    }

    /// See [`NameTransformer::class_name`].
    pub fn class_name(&self, name: &str) -> String {
        self.names.class_name(name)
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(ClassificationTables::standard())
    }
}

impl ElementRewrite for Rewriter {
    fn resolve_tag(&self, tag: &str) -> String {
        self.resolve(tag).to_owned()
    }

    fn rewrite_attributes(
        &self,
        _tag: &str,
        attributes: Attributes,
        context: &RenderContext<'_>,
    ) -> (Option<String>, Attributes) {
        self.tables.rewrite_attributes(attributes, context)
    }

    fn class_name(&self, tag: &str) -> String {
        self.names.class_name(tag)
    }
}
