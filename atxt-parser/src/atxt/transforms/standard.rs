//! Standard transform pipelines
//!
//! All standard pipelines are defined as static references using
//! `once_cell::sync::Lazy`, so callers across library, tooling, and tests
//! share the same pre-built processing paths.

use super::{Runnable, Transform, TransformError};
use crate::atxt::ast::{Document, Node};
use crate::atxt::building::build;
use crate::atxt::lexing::tokenize;
use crate::atxt::token::Token;
use once_cell::sync::Lazy;

/// Stage: source text to token stream.
pub struct Tokenization;

impl Runnable<String, Vec<Token>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<Token>, TransformError> {
        Ok(tokenize(&input)?)
    }
}

/// Stage: token stream to document root node, discarding the source.
pub struct TreeBuilding;

impl Runnable<Vec<Token>, Node> for TreeBuilding {
    fn run(&self, input: Vec<Token>) -> Result<Node, TransformError> {
        Ok(build(&input))
    }
}

/// Source text to tokens.
pub static TOKENIZATION: Lazy<Transform<String, Vec<Token>>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization));

/// Tokens to document root node.
pub static TREE_BUILDING: Lazy<Transform<Vec<Token>, Node>> =
    Lazy::new(|| Transform::from_fn(Ok).then(TreeBuilding));

/// Source text to a full document, retaining the source for error-context
/// reporting by tooling.
pub static STRING_TO_TREE: Lazy<Transform<String, Document>> = Lazy::new(|| {
    Transform::from_fn(|source: String| {
        let tokens = tokenize(&source)?;
        Ok(Document::new(build(&tokens), source))
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization_pipeline() {
        let tokens = TOKENIZATION.run("@a: x\n".to_string()).unwrap();
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_string_to_tree_pipeline() {
        let doc = STRING_TO_TREE.run("@a\n  inner\n".to_string()).unwrap();
        assert!(doc.root.has_kind("a", false));
        assert_eq!(doc.source, "@a\n  inner\n");
    }

    #[test]
    fn test_staged_pipelines_compose() {
        let tokens = TOKENIZATION.run("@a\n".to_string()).unwrap();
        let root = TREE_BUILDING.run(tokens).unwrap();
        assert!(root.has_kind("a", false));
    }

    #[test]
    fn test_syntax_errors_stay_structured() {
        let err = TOKENIZATION
            .run("@a\n  @b\n @c\n".to_string())
            .unwrap_err();
        match err {
            TransformError::Syntax(syntax) => {
                assert_eq!(syntax.message, "indentation mismatch");
                assert_eq!(syntax.line, 3);
            }
            other => panic!("expected syntax error, got {other}"),
        }
    }
}
