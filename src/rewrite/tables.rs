//! Classification tables: the static partition of the semantic vocabulary.
//!
//! Every tag falls into exactly one bucket:
//!
//! | Bucket   | Element tag        | Selector form                 |
//! |----------|--------------------|-------------------------------|
//! | Native   | unchanged          | unchanged                     |
//! | Named    | mapped native tag  | `.class`                      |
//! | Doubled  | unchanged          | `:is(tag, .class)`            |
//! | Default  | the default tag    | `.class`                      |
//!
//! The buckets are expected to be disjoint. This is a configuration-time
//! property: [`ClassificationTables::validate`] checks it, lookups never do
//! and simply take the first matching bucket.

use std::fmt;
use std::sync::Arc;

use crate::rewrite::attributes::ValueTransform;
use crate::rewrite::link::LinkTarget;

/// Errors from table validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("tag '{tag}' is classified both as {first} and as {second}")]
    OverlappingClassification {
        tag: String,
        first: &'static str,
        second: &'static str,
    },
    #[error("attribute rewrite for '{0}' is declared more than once")]
    DuplicateAttributeRewrite(String),
}

/// The bucket a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Passed through unchanged.
    Native,
    /// Rendered as the contained native tag.
    Named(&'a str),
    /// Kept literal but also matched by its class.
    Doubled,
    /// Rendered as the default tag.
    Default,
}

/// Rewrite rule for one semantic attribute.
#[derive(Clone)]
pub struct AttributeRewrite {
    /// Native attribute receiving the (transformed) value.
    pub attribute: String,
    /// Tag overriding the resolved one when this rule applies.
    pub tag: Option<String>,
    /// Optional value transform; the raw value is used when absent.
    pub value: Option<Arc<dyn ValueTransform>>,
}

impl AttributeRewrite {
    /// Copy the value into `attribute` unchanged.
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            tag: None,
            value: None,
        }
    }

    /// Override the element tag (builder).
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Transform the value before writing it (builder).
    pub fn with_value(mut self, transform: impl ValueTransform + 'static) -> Self {
        self.value = Some(Arc::new(transform));
        self
    }
}

impl fmt::Debug for AttributeRewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeRewrite")
            .field("attribute", &self.attribute)
            .field("tag", &self.tag)
            .field("value", &self.value.as_ref().map(|_| "<transform>"))
            .finish()
    }
}

/// Static configuration of the rewriting engine.
///
/// Built once, read-only afterwards. All collections keep insertion order.
#[derive(Debug, Clone)]
pub struct ClassificationTables {
    native: Vec<String>,
    named: Vec<(String, String)>,
    doubled: Vec<String>,
    default_tag: String,
    attribute_rewrites: Vec<(String, AttributeRewrite)>,
    prefix: String,
}

impl ClassificationTables {
    /// Empty tables: every tag resolves to `default_tag`, no prefix is stripped.
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            native: Vec::new(),
            named: Vec::new(),
            doubled: Vec::new(),
            default_tag: default_tag.into(),
            attribute_rewrites: Vec::new(),
            prefix: String::new(),
        }
    }

    /// The stock `ui-` vocabulary.
    pub fn standard() -> Self {
        Self::new("div")
            .with_prefix("ui-")
            .with_native([
                "img", "canvas", "body", "textarea", "select", "option", "optgroup", "input",
            ])
            .with_named("ui-title", "h1")
            .with_named("ui-name", "h2")
            .with_named("ui-description", "p")
            .with_named("ui-section", "section")
            .with_named("ui-navigation", "nav")
            .with_doubled(["ui-icon"])
            .with_attribute_rewrite(
                "ui-href",
                AttributeRewrite::new("href")
                    .with_tag("a")
                    .with_value(LinkTarget),
            )
    }

    /// Set the semantic vocabulary prefix stripped by the name transformer (builder).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Add tags passed through unchanged (builder).
    pub fn with_native(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.native.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Map a semantic tag to a native tag (builder).
    pub fn with_named(mut self, tag: impl Into<String>, native: impl Into<String>) -> Self {
        self.named.push((tag.into(), native.into()));
        self
    }

    /// Add tags kept literal but also class-matched (builder).
    pub fn with_doubled(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.doubled.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Declare a rewrite for a semantic attribute (builder).
    pub fn with_attribute_rewrite(
        mut self,
        attribute: impl Into<String>,
        rewrite: AttributeRewrite,
    ) -> Self {
        self.attribute_rewrites.push((attribute.into(), rewrite));
        self
    }

    /// Classify a tag. The first matching bucket wins.
    pub fn classify(&self, tag: &str) -> Classification<'_> {
        if self.is_native(tag) {
            Classification::Native
        } else if let Some(native) = self.named_target(tag) {
            Classification::Named(native)
        } else if self.is_doubled(tag) {
            Classification::Doubled
        } else {
            Classification::Default
        }
    }

    /// Whether `tag` is in the native set.
    pub fn is_native(&self, tag: &str) -> bool {
        self.native.iter().any(|t| t == tag)
    }

    /// Whether `tag` is in the doubled set.
    pub fn is_doubled(&self, tag: &str) -> bool {
        self.doubled.iter().any(|t| t == tag)
    }

    /// Native tag a named tag maps to.
    pub fn named_target(&self, tag: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, native)| native.as_str())
    }

    /// Rewrite rule for a semantic attribute.
    pub fn attribute_rewrite(&self, attribute: &str) -> Option<&AttributeRewrite> {
        self.attribute_rewrites
            .iter()
            .find(|(key, _)| key == attribute)
            .map(|(_, rewrite)| rewrite)
    }

    /// Fallback tag for unclassified tags.
    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    /// Semantic vocabulary prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Native targets of the named map, in declaration order.
    pub fn named_targets(&self) -> impl Iterator<Item = &str> {
        self.named.iter().map(|(_, native)| native.as_str())
    }

    /// Tags declared by attribute rewrites, in declaration order.
    pub fn attribute_rewrite_tags(&self) -> impl Iterator<Item = &str> {
        self.attribute_rewrites
            .iter()
            .filter_map(|(_, rewrite)| rewrite.tag.as_deref())
    }

    /// Check that the buckets are pairwise disjoint and attribute rewrite keys
    /// are distinct.
    pub fn validate(&self) -> Result<(), TableError> {
        let buckets: [(&'static str, Vec<&str>); 3] = [
            ("native", self.native.iter().map(String::as_str).collect()),
            ("named", self.named.iter().map(|(tag, _)| tag.as_str()).collect()),
            ("doubled", self.doubled.iter().map(String::as_str).collect()),
        ];

        for (i, (first, tags)) in buckets.iter().enumerate() {
            for (second, others) in &buckets[i + 1..] {
                if let Some(tag) = tags.iter().find(|&tag| others.contains(tag)) {
                    return Err(TableError::OverlappingClassification {
                        tag: (*tag).to_owned(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        for (i, (key, _)) in self.attribute_rewrites.iter().enumerate() {
            if self.attribute_rewrites[..i].iter().any(|(seen, _)| seen == key) {
                return Err(TableError::DuplicateAttributeRewrite(key.clone()));
            }
        }

        Ok(())
    }
}

impl Default for ClassificationTables {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_are_valid() {
        assert_eq!(ClassificationTables::standard().validate(), Ok(()));
    }

    #[test]
    fn classify_each_bucket() {
        let tables = ClassificationTables::standard();
        assert_eq!(tables.classify("img"), Classification::Native);
        assert_eq!(tables.classify("ui-title"), Classification::Named("h1"));
        assert_eq!(tables.classify("ui-icon"), Classification::Doubled);
        assert_eq!(tables.classify("ui-card"), Classification::Default);
    }

    #[test]
    fn named_targets_keep_order() {
        let tables = ClassificationTables::standard();
        let targets: Vec<&str> = tables.named_targets().collect();
        assert_eq!(targets, vec!["h1", "h2", "p", "section", "nav"]);
    }

    #[test]
    fn standard_link_rewrite() {
        let tables = ClassificationTables::standard();
        let rewrite = tables.attribute_rewrite("ui-href").unwrap();
        assert_eq!(rewrite.attribute, "href");
        assert_eq!(rewrite.tag.as_deref(), Some("a"));
        assert!(rewrite.value.is_some());
        assert!(tables.attribute_rewrite("href").is_none());
    }

    #[test]
    fn overlap_native_and_doubled_is_reported() {
        let tables = ClassificationTables::new("div")
            .with_native(["img"])
            .with_doubled(["img"]);
        assert_eq!(
            tables.validate(),
            Err(TableError::OverlappingClassification {
                tag: "img".into(),
                first: "native",
                second: "doubled",
            })
        );
    }

    #[test]
    fn overlap_named_wins_for_selectors() {
        let tables = ClassificationTables::new("div")
            .with_named("ui-x", "span")
            .with_doubled(["ui-x"]);
        assert!(tables.validate().is_err());
        assert_eq!(tables.classify("ui-x"), Classification::Named("span"));
    }

    #[test]
    fn duplicate_attribute_rewrite_is_reported() {
        let tables = ClassificationTables::new("div")
            .with_attribute_rewrite("ui-src", AttributeRewrite::new("src"))
            .with_attribute_rewrite("ui-src", AttributeRewrite::new("data-src"));
        let err = tables.validate().unwrap_err();
        assert_eq!(err, TableError::DuplicateAttributeRewrite("ui-src".into()));
        assert_eq!(
            err.to_string(),
            "attribute rewrite for 'ui-src' is declared more than once"
        );
    }

    #[test]
    fn empty_tables_default_everything() {
        let tables = ClassificationTables::new("span");
        assert_eq!(tables.classify("anything"), Classification::Default);
        assert_eq!(tables.default_tag(), "span");
        assert_eq!(tables.prefix(), "");
    }

    #[test]
    fn debug_hides_transform() {
        let rewrite = AttributeRewrite::new("href").with_value(LinkTarget);
        assert!(format!("{rewrite:?}").contains("<transform>"));
    }
}
