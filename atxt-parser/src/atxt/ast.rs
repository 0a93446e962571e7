//! The atxt node tree.
//!
//!     Everything a document contains is one of two things: a raw text line
//!     or a typed node with ordered parameters and ordered children. The
//!     root of a document is itself a node with an empty kind whose
//!     children are the top-level sequence of siblings and text lines.
//!
//!     Indentation in the source is the manifestation of the parent-child
//!     relation; once built, the tree carries no positions and no source
//!     references. Consumers navigate it through the selection module and
//!     re-emit it through the serializer.

pub mod document;
pub mod node;
pub mod snapshot;

pub use document::Document;
pub use node::{Child, Node};
