//! Fluent assertion API for node trees.
//!
//! Entry point is [`assert_tree`]; every assertion panics with a path
//! context (`root > child[1] > child[0]`) so a failure names the exact
//! node that disappointed.

use crate::atxt::ast::{Child, Node};

/// Create an assertion builder for a tree root.
pub fn assert_tree(root: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node: root,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node's kind.
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.node.kind, expected,
            "{}: expected kind '{}', found '{}'",
            self.context, expected, self.node.kind
        );
        self
    }

    /// Assert the full ordered parameter list.
    pub fn params(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.node.params.iter().map(String::as_str).collect();
        assert_eq!(
            actual, expected,
            "{}: parameter mismatch",
            self.context
        );
        self
    }

    /// Assert the exact number of children.
    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: expected {} children, found {}",
            self.context,
            expected,
            self.node.children.len()
        );
        self
    }

    /// Assert the node has no children at all.
    pub fn no_children(self) -> Self {
        self.child_count(0)
    }

    /// Assert the child at `index` is a text line with the given value.
    pub fn text(self, index: usize, expected: &str) -> Self {
        match self.child(index) {
            Child::Text(actual) => assert_eq!(
                actual, expected,
                "{}: text mismatch at child[{}]",
                self.context, index
            ),
            Child::Node(node) => panic!(
                "{}: expected text at child[{}], found node '{}'",
                self.context, index, node.kind
            ),
        }
        self
    }

    /// Descend into the child node at `index` and run nested assertions.
    pub fn node(self, index: usize, assert: impl FnOnce(NodeAssertion<'_>)) -> Self {
        match self.child(index) {
            Child::Node(node) => assert(NodeAssertion {
                node,
                context: format!("{} > child[{}]", self.context, index),
            }),
            Child::Text(text) => panic!(
                "{}: expected node at child[{}], found text {:?}",
                self.context, index, text
            ),
        }
        self
    }

    fn child(&self, index: usize) -> &'a Child {
        match self.node.children.get(index) {
            Some(child) => child,
            None => panic!(
                "{}: no child at index {} (only {} children)",
                self.context,
                index,
                self.node.children.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atxt::testing::factories::{node, text, tree};

    #[test]
    fn test_passing_chain() {
        let root = tree(vec![
            text("intro"),
            node("note", &["a", "b c"], vec![text("body")]),
        ]);
        assert_tree(&root)
            .child_count(2)
            .text(0, "intro")
            .node(1, |n| {
                n.kind("note").params(&["a", "b c"]).child_count(1).text(0, "body");
            });
    }

    #[test]
    #[should_panic(expected = "expected kind")]
    fn test_kind_mismatch_panics() {
        let root = tree(vec![node("note", &[], vec![])]);
        assert_tree(&root).node(0, |n| {
            n.kind("other");
        });
    }

    #[test]
    #[should_panic(expected = "no child at index")]
    fn test_missing_child_panics() {
        let root = tree(vec![]);
        assert_tree(&root).text(0, "anything");
    }
}
