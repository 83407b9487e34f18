//! Reset stylesheet covering every tag the engine can produce.

use crate::rewrite::Rewriter;

/// Declaration block neutralising user-agent and inherited styling.
pub const RESET_DECLARATIONS: &str = "all:unset";

impl Rewriter {
    /// Build the global reset rule.
    ///
    /// The selector list is the default tag, every named target and every
    /// attribute-rewrite target tag, in table order, each listed once.
    pub fn build_reset(&self) -> String {
        let tables = self.tables();
        let mut tags: Vec<&str> = Vec::new();

        let candidates = std::iter::once(tables.default_tag())
            .chain(tables.named_targets())
            .chain(tables.attribute_rewrite_tags());
        for tag in candidates {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        format!("{}{{{}}}", tags.join(","), RESET_DECLARATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::{AttributeRewrite, ClassificationTables};

    #[test]
    fn standard_reset() {
        insta::assert_snapshot!(
            Rewriter::default().build_reset(),
            @"div,h1,h2,p,section,nav,a{all:unset}"
        );
    }

    #[test]
    fn duplicates_are_listed_once() {
        let rewriter = Rewriter::new(
            ClassificationTables::new("div")
                .with_named("ui-box", "div")
                .with_named("ui-caption", "span")
                .with_named("ui-label", "span")
                .with_attribute_rewrite("ui-href", AttributeRewrite::new("href").with_tag("a"))
                .with_attribute_rewrite("ui-link", AttributeRewrite::new("href").with_tag("a"))
                .with_attribute_rewrite("ui-tip", AttributeRewrite::new("title")),
        );
        assert_eq!(rewriter.build_reset(), "div,span,a{all:unset}");
    }

    #[test]
    fn every_tag_appears_exactly_once() {
        let reset = Rewriter::default().build_reset();
        let selectors = reset.strip_suffix("{all:unset}").unwrap();
        let tags: Vec<&str> = selectors.split(',').collect();
        for tag in ["div", "h1", "h2", "p", "section", "nav", "a"] {
            assert_eq!(tags.iter().filter(|t| **t == tag).count(), 1, "{tag}");
        }
        assert_eq!(tags.len(), 7);
    }

    #[test]
    fn empty_tables_reset_default_only() {
        let rewriter = Rewriter::new(ClassificationTables::new("span"));
        assert_eq!(rewriter.build_reset(), "span{all:unset}");
    }
}
