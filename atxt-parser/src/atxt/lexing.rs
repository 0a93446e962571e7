//! Lexer
//!
//!     This module turns raw atxt source into a flat token stream. The
//!     scanner has no knowledge of tree structure; it tracks indentation
//!     and lexical state only. The tree builder consumes the resulting
//!     immutable token vector.
//!
//! Indentation Handling
//!
//!     Indentation is compared against a stack of absolute column counts,
//!     so step sizes are arbitrary: a block may indent by two columns, its
//!     sibling by three. Each level change is emitted as a semantic
//!     `Indent`/`Dedent` token carrying the column delta, which maps nicely
//!     to brace tokens in more conventional syntaxes and keeps the tree
//!     builder free of column arithmetic. A dedent that lands between two
//!     recorded levels is a syntax error; there is no recovery.
//!
//! Failure Mode
//!
//!     A malformed document produces a single [`SyntaxError`] carrying
//!     line, column, byte offset, and a caret-marked snippet of the
//!     surrounding source. No partial token stream is ever returned.

pub mod error;
pub mod scanner;

pub use error::SyntaxError;

use crate::atxt::token::Token;

/// Preprocesses source text to ensure it ends with a newline.
///
/// This keeps end-of-input handling on the same path as end-of-line
/// handling. Returns the original string if it already ends with a newline
/// or is empty; otherwise appends a newline.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Tokenize atxt source text into a flat token stream.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let source = ensure_source_ends_with_newline(source);
    scanner::scan(&source)
}
