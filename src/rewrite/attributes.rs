//! Attribute sets and the attribute rewrite pipeline.

use crate::context::RenderContext;
use crate::rewrite::tables::ClassificationTables;

/// Value transform attached to an attribute rewrite.
pub trait ValueTransform {
    fn transform(&self, value: &str, context: &RenderContext<'_>) -> String;
}

impl<F> ValueTransform for F
where
    F: Fn(&str, &RenderContext<'_>) -> String,
{
    fn transform(&self, value: &str, context: &RenderContext<'_>) -> String {
        self(value, context)
    }
}

/// Insertion-ordered attribute map.
///
/// Writing an existing key replaces its value in place, so iteration order
/// only ever grows at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set `key` to `value`, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set an attribute (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.set(key, value);
        }
        attributes
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl ClassificationTables {
    /// Apply every matching attribute rewrite to `attributes`.
    ///
    /// Returns the tag override declared by the last applied rewrite, if any,
    /// and the rewritten attribute set. Keys are processed in the input's
    /// iteration order and later writes win. Attributes produced here are not
    /// themselves re-processed, and keys without a rule are left untouched.
    pub fn rewrite_attributes(
        &self,
        attributes: Attributes,
        context: &RenderContext<'_>,
    ) -> (Option<String>, Attributes) {
        let mut tag = None;
        let mut rewritten = attributes.clone();

        for (key, raw) in attributes.iter() {
            let Some(rule) = self.attribute_rewrite(key) else {
                continue;
            };

            let value = match &rule.value {
                Some(transform) => transform.transform(raw, context),
                None => raw.to_owned(),
            };
            rewritten.set(rule.attribute.as_str(), value);

            if let Some(target) = &rule.tag {
                tag = Some(target.clone());
            }
        }

        (tag, rewritten)
    }
}
