//! Testing utilities for tree assertions
//!
//!     atxt is a novel format with no established body of source text. If a
//!     test asserts against a fragment of a tree, a parser bug that moves a
//!     child one level up or down can slip through unnoticed. Parser tests
//!     therefore assert complete shapes: child counts, kinds, params, and
//!     text, via the fluent [`assert_tree`](fn@assert_tree) API, rather
//!     than spot-checking a single node.
//!
//!     The [`factories`] module builds expected trees tersely; pair it with
//!     structural equality when a full-tree comparison reads better than a
//!     fluent chain.

pub mod assertions;
pub mod factories;

pub use assertions::{assert_tree, NodeAssertion};
pub use factories::{node, text, tree};
