//! Document loading utilities
//!
//! `DocumentLoader` loads source text from files or strings and runs
//! transforms on it. Used by both production code and tests.

use crate::atxt::ast::Document;
use crate::atxt::token::Token;
use crate::atxt::transforms::standard::{STRING_TO_TREE, TOKENIZATION};
use crate::atxt::transforms::{Transform, TransformError};
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents.
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(String),
    /// Transform/parsing error
    TransformError(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::TransformError(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::TransformError(err)
    }
}

/// Document loader with transform shortcuts.
#[derive(Debug)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source.
    ///
    /// This is the generic method that all shortcuts use internally.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Parse the source into a document. Shortcut for
    /// `.with(&STRING_TO_TREE)`.
    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.with(&STRING_TO_TREE)
    }

    /// Tokenize the source. Shortcut for `.with(&TOKENIZATION)`.
    pub fn tokenize(&self) -> Result<Vec<Token>, LoaderError> {
        self.with(&TOKENIZATION)
    }

    /// Get a reference to the raw source string.
    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
