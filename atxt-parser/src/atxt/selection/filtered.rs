//! Read-only filtered views.

use super::view::Selection;
use crate::atxt::ast::{Child, Node};

/// The result of [`Selection::filter`]: a copy of a node whose children
/// are the filtered subset. The copy is not linked back to the tree it
/// came from, so this type exposes no mutation methods - an edit that
/// could never reach the real tree is a compile error, not a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    node: Node,
}

impl FilteredView {
    pub(crate) fn new(node: Node) -> Self {
        FilteredView { node }
    }

    pub fn kind(&self) -> &str {
        &self.node.kind
    }

    pub fn params(&self) -> &[String] {
        &self.node.params
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.node.params.get(index).map(String::as_str)
    }

    pub fn children(&self) -> &[Child] {
        &self.node.children
    }

    pub fn has(&self, kind: &str, recursive: bool) -> bool {
        self.node.has_kind(kind, recursive)
    }

    /// A read-only selection over the filtered copy, for traversal and
    /// `transform`.
    pub fn selection(&self) -> Selection<'_> {
        Selection::new(&self.node)
    }

    /// Take ownership of the filtered copy. This is the explicit way to
    /// keep filtered results; it visibly hands over a detached tree.
    pub fn into_node(self) -> Node {
        self.node
    }
}
