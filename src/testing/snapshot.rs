//! Snapshot rendering helpers.
//!
//! Serialise element trees to compact markup for snapshot-style assertions.

use crate::dom::{Dom, NodeId};
use crate::host::Document;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render the subtree at `node` as markup on a single line.
///
/// Elements print as `<tag class="a b" key="value">children</tag>`: the class
/// list first, then attributes in insertion order. Text nodes print their
/// escaped content. A missing node renders as an empty string.
///
/// ```
/// use ui_rewrite::dom::{Dom, NodeData};
/// use ui_rewrite::testing::markup;
///
/// let mut dom = Dom::new();
/// let h1 = dom.insert(NodeData::new("h1").with_class("title"));
/// dom.insert_child(h1, NodeData::text("Hi"));
/// assert_eq!(markup(&dom, h1), r#"<h1 class="title">Hi</h1>"#);
/// ```
pub fn markup(dom: &Dom, node: NodeId) -> String {
    let mut out = String::new();
    write_node(dom, node, &mut out);
    out
}

/// Render the document's mounted root, or an empty string when nothing is mounted.
pub fn document_markup(document: &Document) -> String {
    document
        .dom()
        .root()
        .map(|root| markup(document.dom(), root))
        .unwrap_or_default()
}

fn write_node(dom: &Dom, node: NodeId, out: &mut String) {
    let Some(data) = dom.get(node) else {
        return;
    };

    if let Some(text) = &data.text {
        out.push_str(&escape(text));
        return;
    }

    out.push('<');
    out.push_str(&data.tag);
    if !data.classes.is_empty() {
        out.push_str(&format!(r#" class="{}""#, escape(&data.classes.join(" "))));
    }
    for (key, value) in data.attributes.iter() {
        out.push_str(&format!(r#" {key}="{}""#, escape(value)));
    }
    out.push('>');

    for &child in dom.children(node) {
        write_node(dom, child, out);
    }

    out.push_str("</");
    out.push_str(&data.tag);
    out.push('>');
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;
    use crate::rewrite::Attributes;

    #[test]
    fn nested_markup() {
        let mut dom = Dom::new();
        let nav = dom.insert(NodeData::new("nav").with_class("navigation"));
        let a = dom.insert_child(
            nav,
            NodeData::new("a")
                .with_class("href")
                .with_attributes(Attributes::from([("ui-href", "/"), ("href", "/")])),
        );
        dom.insert_child(a, NodeData::text("Home"));
        assert_eq!(
            markup(&dom, nav),
            r#"<nav class="navigation"><a class="href" ui-href="/" href="/">Home</a></nav>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut dom = Dom::new();
        let p = dom.insert(
            NodeData::new("p").with_attributes(Attributes::from([("title", r#"a "b""#)])),
        );
        dom.insert_child(p, NodeData::text("1 < 2 & 3"));
        assert_eq!(
            markup(&dom, p),
            r#"<p title="a &quot;b&quot;">1 &lt; 2 &amp; 3</p>"#
        );
    }

    #[test]
    fn unmounted_document_renders_empty() {
        assert_eq!(document_markup(&Document::new()), "");
    }
}
