//! Selector rewriter.
//!
//! Author stylesheets are written against the semantic vocabulary; the DOM
//! carries native tags plus derived classes. Every bare tag candidate in a
//! selector is rewritten with the same classification the tag resolver uses:
//!
//! - native → unchanged (`img`)
//! - named or unclassified → class (`ui-title` → `.title`, `card` → `.card`)
//! - doubled → either form (`ui-icon` → `:is(ui-icon, .icon)`)
//!
//! A small state machine over the token stream decides what counts as a bare
//! candidate. Attribute selectors, quoted strings, pseudo-class names and the
//! arguments of non-selector pseudo functions (`:nth-child(2n+1)`,
//! `:lang(en)`) pass through untouched, as does anything that does not look
//! like a lowercase tag name.

use tracing::trace;

use crate::css::tokenizer::{tokenize, Token};
use crate::rewrite::tables::Classification;
use crate::rewrite::Rewriter;

/// Functional pseudo-classes whose arguments are themselves selectors.
const SELECTOR_FUNCTIONS: &[&str] = &[
    "is",
    "not",
    "where",
    "has",
    "matches",
    "host",
    "host-context",
    "slotted",
];

/// What the innermost open parenthesis contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arguments {
    Selector,
    Opaque,
}

impl Rewriter {
    /// Rewrite an author selector so it matches the rewritten DOM.
    pub fn rewrite_selector(&self, selector: &str) -> String {
        let mut out = String::with_capacity(selector.len() + 16);
        // Depth inside `[...]`.
        let mut brackets = 0usize;
        let mut parens: Vec<Arguments> = Vec::new();
        let mut previous: Option<Token> = None;
        // Name of a pseudo-class that may open an argument list next.
        let mut pseudo: Option<&str> = None;

        for (token, text) in tokenize(selector) {
            if brackets > 0 {
                match token {
                    Some(Token::BracketOpen) => brackets += 1,
                    Some(Token::BracketClose) => brackets -= 1,
                    _ => {}
                }
                out.push_str(text);
                previous = token;
                continue;
            }

            if parens.last() == Some(&Arguments::Opaque) {
                match token {
                    Some(Token::ParenOpen) => parens.push(Arguments::Opaque),
                    Some(Token::ParenClose) => {
                        parens.pop();
                    }
                    _ => {}
                }
                out.push_str(text);
                previous = token;
                continue;
            }

            let opened_by = pseudo.take();
            match token {
                Some(Token::Word) => match previous {
                    Some(Token::Colon) => {
                        pseudo = Some(text);
                        out.push_str(text);
                    }
                    Some(Token::Dot | Token::Hash) => out.push_str(text),
                    _ => out.push_str(&self.rewrite_candidate(text)),
                },
                Some(Token::BracketOpen) => {
                    brackets = 1;
                    out.push_str(text);
                }
                Some(Token::ParenOpen) => {
                    let arguments = match opened_by {
                        Some(name) if SELECTOR_FUNCTIONS.contains(&name) => Arguments::Selector,
                        _ => Arguments::Opaque,
                    };
                    parens.push(arguments);
                    out.push_str(text);
                }
                Some(Token::ParenClose) => {
                    parens.pop();
                    out.push_str(text);
                }
                _ => out.push_str(text),
            }
            previous = token;
        }

        trace!(selector, rewritten = %out, "rewrote selector");
        out
    }

    /// Rewrite one bare word according to its classification.
    fn rewrite_candidate(&self, word: &str) -> String {
        if !is_tag_candidate(word) {
            return word.to_owned();
        }

        match self.tables().classify(word) {
            Classification::Native => word.to_owned(),
            Classification::Doubled => format!(":is({word}, .{})", self.class_name(word)),
            Classification::Named(_) | Classification::Default => {
                format!(".{}", self.class_name(word))
            }
        }
    }
}

/// Whether `word` has the shape of a lowercase tag name: `[a-z][a-z0-9-]*`.
fn is_tag_candidate(word: &str) -> bool {
    let mut bytes = word.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_lowercase())
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
