//! Style compiler: nested style groups to flat CSS text.
//!
//! Every group selector goes through the compiler's [`SelectorTransform`]
//! before it is joined to its parent. The transform is a strategy object
//! supplied to the compiler; the default passes selectors through unchanged.

use std::sync::Arc;

use crate::rewrite::Rewriter;

/// Selector compilation hook.
pub trait SelectorTransform {
    fn wrap_selector(&self, selector: &str) -> String;
}

/// Leaves selectors as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl SelectorTransform for PassThrough {
    fn wrap_selector(&self, selector: &str) -> String {
        selector.to_owned()
    }
}

impl SelectorTransform for Rewriter {
    fn wrap_selector(&self, selector: &str) -> String {
        self.rewrite_selector(selector)
    }
}

/// A selector with declarations and nested groups.
///
/// A nested selector starting with `&` attaches to its parent without a
/// descendant combinator (`&:hover`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGroup {
    selector: String,
    declarations: Vec<(String, String)>,
    children: Vec<StyleGroup>,
}

impl StyleGroup {
    pub fn select(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a declaration (builder).
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Nest a group (builder).
    pub fn child(mut self, group: StyleGroup) -> Self {
        self.children.push(group);
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

/// Compiles [`StyleGroup`] trees into CSS.
#[derive(Clone)]
pub struct StyleCompiler {
    transform: Arc<dyn SelectorTransform>,
}

impl StyleCompiler {
    /// Compiler with the pass-through transform.
    pub fn new() -> Self {
        Self {
            transform: Arc::new(PassThrough),
        }
    }

    /// Replace the selector transform.
    pub fn set_transform(&mut self, transform: Arc<dyn SelectorTransform>) {
        self.transform = transform;
    }

    /// Compile one group and its descendants. Groups without declarations
    /// emit no rule of their own.
    pub fn compile(&self, group: &StyleGroup) -> String {
        let mut out = String::new();
        self.compile_into(group, None, &mut out);
        out
    }

    fn compile_into(&self, group: &StyleGroup, parent: Option<&str>, out: &mut String) {
        let own = self.transform.wrap_selector(&group.selector);
        let selector = match parent {
            None => own,
            Some(parent) => {
                let parent = if has_top_level_comma(parent) {
                    format!(":is({parent})")
                } else {
                    parent.to_owned()
                };
                match own.strip_prefix('&') {
                    Some(rest) => format!("{parent}{rest}"),
                    None => format!("{parent} {own}"),
                }
            }
        };

        if !group.declarations.is_empty() {
            out.push_str(&selector);
            out.push('{');
            for (property, value) in &group.declarations {
                out.push_str(property);
                out.push(':');
                out.push_str(value);
                out.push(';');
            }
            out.push('}');
        }

        for child in &group.children {
            self.compile_into(child, Some(&selector), out);
        }
    }
}

impl Default for StyleCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleCompiler").finish_non_exhaustive()
    }
}

/// Whether `selector` is a list (a comma outside parentheses, brackets and strings).
fn has_top_level_comma(selector: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in selector.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => return true,
            _ => {}
        }
    }
    false
}
