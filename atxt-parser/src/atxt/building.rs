//! Tree builder
//!
//!     Consumes the flat token stream produced by the lexer and folds it
//!     into the node tree. The builder assumes the stream is well-formed
//!     (the lexer guarantees bracket and indentation validity) and does not
//!     re-validate.
//!
//!     State is held in explicit stacks: a frame stack shared by
//!     indent/dedent pairs and same-line/inline start/end pairs, plus the
//!     current insertion target and the most recently created node, both
//!     tracked as child-index paths into the owned tree rather than node
//!     references.

pub mod builder;
pub mod params;

pub use builder::build;
pub use params::split_params;

use crate::atxt::ast::Document;
use crate::atxt::lexing::{tokenize, SyntaxError};

/// Parse atxt source straight to a document.
pub fn parse_document(source: &str) -> Result<Document, SyntaxError> {
    let tokens = tokenize(source)?;
    Ok(Document::new(build(&tokens), source))
}
