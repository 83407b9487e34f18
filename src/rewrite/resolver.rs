//! Tag resolver and name transformer.

use crate::rewrite::tables::{Classification, ClassificationTables};

impl ClassificationTables {
    /// Map a semantic tag to the native tag it renders as.
    ///
    /// Native and doubled tags come back unchanged, named tags map to their
    /// target and everything else falls back to the default tag. A tag listed
    /// as doubled is kept even when the named map also has it.
    pub fn resolve<'a>(&'a self, tag: &'a str) -> &'a str {
        if self.is_doubled(tag) {
            return tag;
        }
        match self.classify(tag) {
            Classification::Native | Classification::Doubled => tag,
            Classification::Named(native) => native,
            Classification::Default => self.default_tag(),
        }
    }
}

/// Derives CSS class names from semantic names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTransformer {
    prefix: String,
}

impl NameTransformer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Remove the first occurrence of the vocabulary prefix.
    pub fn class_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            return name.to_owned();
        }
        name.replacen(self.prefix.as_str(), "", 1)
    }
}

impl From<&ClassificationTables> for NameTransformer {
    fn from(tables: &ClassificationTables) -> Self {
        Self::new(tables.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_tags_resolve_to_target() {
        let tables = ClassificationTables::standard();
        for (tag, native) in [
            ("ui-title", "h1"),
            ("ui-name", "h2"),
            ("ui-description", "p"),
            ("ui-section", "section"),
            ("ui-navigation", "nav"),
        ] {
            assert_eq!(tables.resolve(tag), native, "{tag}");
        }
    }

    #[test]
    fn native_and_doubled_pass_through() {
        let tables = ClassificationTables::standard();
        for tag in ["img", "canvas", "body", "textarea", "select", "option", "optgroup", "input"] {
            assert_eq!(tables.resolve(tag), tag);
        }
        assert_eq!(tables.resolve("ui-icon"), "ui-icon");
    }

    #[test]
    fn doubled_beats_named_on_overlap() {
        let tables = ClassificationTables::new("div")
            .with_named("ui-x", "span")
            .with_doubled(["ui-x"]);
        assert_eq!(tables.resolve("ui-x"), "ui-x");
        assert_eq!(tables.classify("ui-x"), Classification::Named("span"));
    }

    #[test]
    fn unknown_tags_fall_back_to_default() {
        let tables = ClassificationTables::standard();
        assert_eq!(tables.resolve("ui-card"), "div");
        assert_eq!(tables.resolve("span"), "div");
        assert_eq!(tables.resolve(""), "div");
        // Named targets are not themselves classified.
        assert_eq!(tables.resolve("h1"), "div");
    }

    #[test]
    fn class_name_strips_prefix() {
        let names = NameTransformer::new("ui-");
        assert_eq!(names.class_name("ui-title"), "title");
        assert_eq!(names.class_name("ui-icon"), "icon");
    }

    #[test]
    fn class_name_strips_only_once() {
        let names = NameTransformer::new("ui-");
        assert_eq!(names.class_name("ui-ui-button"), "ui-button");
    }

    #[test]
    fn class_name_without_prefix_is_identity() {
        let names = NameTransformer::new("ui-");
        assert_eq!(names.class_name("card"), "card");
        assert_eq!(NameTransformer::new("").class_name("ui-card"), "ui-card");
    }

    #[test]
    fn transformer_from_tables() {
        let names = NameTransformer::from(&ClassificationTables::standard());
        assert_eq!(names.class_name("ui-section"), "section");
    }
}
