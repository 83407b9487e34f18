//! logos-based selector tokenizer.
//!
//! Only splits selector text finely enough to find bare identifiers and the
//! constructs that shield them (pseudo-classes, attribute selectors, quoted
//! strings). Whitespace is a token so "preceded by" checks stay exact. Bytes
//! matching no token come out as errors, which callers copy through verbatim.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Identifier-like run: `ui-title`, `nth-child`, `2n`, `--var`, `a\.b`.
    #[regex(r"([a-zA-Z0-9_-]|[^\x00-\x7F]|\\[^\n])+")]
    Word,

    /// Double-quoted string. An unterminated string runs to the end of input.
    #[regex(r#""([^"\\]|\\[^\n])*"?"#)]
    DoubleQuoted,

    /// Single-quoted string. An unterminated string runs to the end of input.
    #[regex(r"'([^'\\]|\\[^\n])*'?")]
    SingleQuoted,

    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    /// `:`
    #[token(":")]
    Colon,

    /// `.`
    #[token(".")]
    Dot,

    /// `#`
    #[token("#")]
    Hash,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,
}

/// Tokenize a selector into `(token, text)` pairs. Unrecognised bytes become
/// `None` entries so the text can always be reassembled.
pub fn tokenize(input: &str) -> Vec<(Option<Token>, &str)> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| (result.ok(), &input[span]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<Option<Token>> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn words_keep_hyphens() {
        let result = tokenize("ui-title");
        assert_eq!(result, vec![(Some(Token::Word), "ui-title")]);
    }

    #[test]
    fn compound_selector() {
        assert_eq!(
            tokens("ui-icon.big:hover"),
            vec![
                Some(Token::Word),
                Some(Token::Dot),
                Some(Token::Word),
                Some(Token::Colon),
                Some(Token::Word),
            ]
        );
    }

    #[test]
    fn whitespace_is_a_token() {
        assert_eq!(
            tokens("a  b"),
            vec![Some(Token::Word), Some(Token::Whitespace), Some(Token::Word)]
        );
    }

    #[test]
    fn attribute_selector_with_string() {
        let result = tokenize(r#"[href="ui-icon"]"#);
        assert_eq!(result[0], (Some(Token::BracketOpen), "["));
        assert_eq!(result[1], (Some(Token::Word), "href"));
        assert_eq!(result[2], (None, "="));
        assert_eq!(result[3], (Some(Token::DoubleQuoted), r#""ui-icon""#));
        assert_eq!(result[4], (Some(Token::BracketClose), "]"));
    }

    #[test]
    fn escaped_quote_stays_in_string() {
        let result = tokenize(r#""a\"b" c"#);
        assert_eq!(result[0], (Some(Token::DoubleQuoted), r#""a\"b""#));
        assert_eq!(result[2], (Some(Token::Word), "c"));
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let result = tokenize("'abc ui-title");
        assert_eq!(result, vec![(Some(Token::SingleQuoted), "'abc ui-title")]);
    }

    #[test]
    fn escaped_character_joins_word() {
        let result = tokenize(r"a\.b");
        assert_eq!(result, vec![(Some(Token::Word), r"a\.b")]);
    }

    #[test]
    fn combinators_are_unrecognised() {
        let result = tokenize("a>b,c");
        assert_eq!(result[1], (None, ">"));
        assert_eq!(result[3], (None, ","));
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            tokens(":not(a)"),
            vec![
                Some(Token::Colon),
                Some(Token::Word),
                Some(Token::ParenOpen),
                Some(Token::Word),
                Some(Token::ParenClose),
            ]
        );
    }

    #[test]
    fn tokens_reassemble_input() {
        let input = r#"ui-section > a[data-x='1']:not(.x) , #id::before"#;
        let joined: String = tokenize(input).into_iter().map(|(_, text)| text).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }
}
