//! Output formats for the node tree.
//!
//! The serializer is the structural inverse of the tree builder and emits
//! canonical atxt text; treeviz renders a tree shape for debugging.

pub mod serializer;
pub mod treeviz;

pub use serializer::render;
pub use treeviz::render_tree;
