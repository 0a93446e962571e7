//! Core token types shared across the lexer, tree builder, and tooling.
//!
//!     Tokens are immutable and produced in source order; no token references
//!     another. `Indent` and `Dedent` carry the magnitude of the indentation
//!     change rather than the absolute level, so a consumer can replay the
//!     indent stack without re-reading the source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single lexical token of the atxt format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// An annotation name. Empty value marks an escape sequence: the
    /// following params/bracketed text is literal content, not markup.
    Type(String),
    /// Raw parameter text, split by the tree builder.
    Params(String),
    /// A run of literal text.
    Content(String),
    /// A line consisting only of whitespace; the value is the captured
    /// leading whitespace.
    EmptyContent(String),
    /// A `#` comment line; the value is the text after the marker.
    Comment(String),
    /// Indentation increased by the carried number of columns.
    Indent(usize),
    /// Indentation decreased by the carried number of columns.
    Dedent(usize),
    StartSameLineContent,
    EndSameLineContent,
    StartInlineContent,
    EndInlineContent,
}

impl Token {
    /// The payload text of a value-carrying token, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Token::Type(v)
            | Token::Params(v)
            | Token::Content(v)
            | Token::EmptyContent(v)
            | Token::Comment(v) => Some(v),
            _ => None,
        }
    }

    /// The indentation delta of an `Indent`/`Dedent` token, if any.
    pub fn magnitude(&self) -> Option<usize> {
        match self {
            Token::Indent(n) | Token::Dedent(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Type(v) => write!(f, "TYPE({v})"),
            Token::Params(v) => write!(f, "PARAMS({v})"),
            Token::Content(v) => write!(f, "CONTENT({v})"),
            Token::EmptyContent(v) => write!(f, "EMPTY_CONTENT({})", v.len()),
            Token::Comment(v) => write!(f, "COMMENT({v})"),
            Token::Indent(n) => write!(f, "INDENT({n})"),
            Token::Dedent(n) => write!(f, "DEDENT({n})"),
            Token::StartSameLineContent => write!(f, "START_SAME_LINE_CONTENT"),
            Token::EndSameLineContent => write!(f, "END_SAME_LINE_CONTENT"),
            Token::StartInlineContent => write!(f, "START_INLINE_CONTENT"),
            Token::EndInlineContent => write!(f, "END_INLINE_CONTENT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessor() {
        assert_eq!(Token::Type("note".to_string()).value(), Some("note"));
        assert_eq!(Token::Indent(4).value(), None);
    }

    #[test]
    fn test_magnitude_accessor() {
        assert_eq!(Token::Dedent(2).magnitude(), Some(2));
        assert_eq!(Token::Content("x".to_string()).magnitude(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Type("a".to_string()).to_string(), "TYPE(a)");
        assert_eq!(Token::StartInlineContent.to_string(), "START_INLINE_CONTENT");
    }
}
