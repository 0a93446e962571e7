//! Document: a parsed tree plus its original source text.

use super::node::Node;
use crate::atxt::formats::serializer;
use crate::atxt::selection::{Cursor, Selection};

/// The root node of a parsed document together with the source it was
/// parsed from. The source is retained only for error-context reporting by
/// tooling, never for re-parsing; the tree is the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
    pub source: String,
}

impl Document {
    pub fn new(root: Node, source: impl Into<String>) -> Self {
        Document {
            root,
            source: source.into(),
        }
    }

    /// A read-only selection over the document root.
    pub fn selection(&self) -> Selection<'_> {
        Selection::new(&self.root)
    }

    /// A mutable cursor over the document root.
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(&mut self.root)
    }

    /// Render the tree back to canonical atxt text.
    pub fn render(&self) -> String {
        serializer::render(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atxt::ast::Child;

    #[test]
    fn test_selection_sees_root_children() {
        let root = Node::new("").with_children(vec![Child::Node(Node::new("a"))]);
        let doc = Document::new(root, "@a\n");
        assert!(doc.selection().has("a", false));
    }

    #[test]
    fn test_cursor_mutates_root() {
        let root = Node::new("").with_children(vec![Child::Node(Node::new("a"))]);
        let mut doc = Document::new(root, "@a\n");
        doc.cursor().add("appended");
        assert_eq!(doc.root.children.len(), 2);
    }
}
