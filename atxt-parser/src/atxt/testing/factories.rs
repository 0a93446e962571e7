//! Terse constructors for expected trees in tests.

use crate::atxt::ast::{Child, Node};

/// A text child.
pub fn text(value: &str) -> Child {
    Child::Text(value.to_string())
}

/// A node child with kind, params, and children.
pub fn node(kind: &str, params: &[&str], children: Vec<Child>) -> Child {
    Child::Node(
        Node::new(kind)
            .with_params(params.iter().map(|p| p.to_string()).collect())
            .with_children(children),
    )
}

/// A document root over the given children.
pub fn tree(children: Vec<Child>) -> Node {
    Node::default().with_children(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_compose() {
        let root = tree(vec![
            text("intro"),
            node("note", &["a"], vec![text("body")]),
        ]);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.first_of_kind("note").expect("note").params, ["a"]);
    }
}
