//! Tree navigation and mutation
//!
//!     All downstream consumers work with the tree through this module;
//!     none of them see tokens or source text.
//!
//!     The surface splits in two. [`Selection`] is a cheap read-only view
//!     with parent tracking: querying, traversal, and the async fan-out in
//!     [`Selection::transform_concurrent`]. [`Cursor`] is the write
//!     surface: it holds the one exclusive borrow of the tree and edits in
//!     place. [`FilteredView`] is what [`Selection::filter`] returns - an
//!     owned copy whose children are the filtered subset. Because that copy
//!     is disconnected from the original tree, the type carries no mutation
//!     methods at all: a write that could never reach the real tree fails
//!     to compile instead of silently disappearing.
//!
//!     The intended usage pattern is single-writer: one build pass owns and
//!     mutates a tree at a time before handing it to the next pass. Nothing
//!     here locks.

pub mod cursor;
pub mod filtered;
pub mod view;

pub use cursor::Cursor;
pub use filtered::FilteredView;
pub use view::{Selection, SelectionChild};

use std::fmt;

/// Errors from selection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A required select found no match.
    RequiredMissing { kind: String },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::RequiredMissing { kind } => {
                write!(f, "required selection '{}' has no match", kind)
            }
        }
    }
}

impl std::error::Error for SelectionError {}
