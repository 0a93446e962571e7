//! Node and child types for the atxt tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in a node's ordered child list: a raw text line or a nested
/// annotated element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl Child {
    /// The nested node, if this child is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(n) => Some(n),
            Child::Text(_) => None,
        }
    }

    /// The raw text, if this child is a text line.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(t) => Some(t),
            Child::Node(_) => None,
        }
    }

    /// Whether this child is a node of the given kind.
    pub fn is_kind(&self, kind: &str) -> bool {
        matches!(self, Child::Node(n) if n.kind == kind)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

/// A typed tree element: a kind name, ordered positional parameters, and
/// ordered children. `params` and `children` are always present, possibly
/// empty. The document root is a `Node` with an empty kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Node {
    pub kind: String,
    pub params: Vec<String>,
    pub children: Vec<Child>,
}

impl Node {
    pub fn new(kind: impl Into<String>) -> Self {
        Node {
            kind: kind.into(),
            params: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Preferred builder
    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node is a document root (empty kind, no params).
    pub fn is_root(&self) -> bool {
        self.kind.is_empty() && self.params.is_empty()
    }

    /// Iterate the nested node children, skipping text lines.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Iterate the text children, skipping nested nodes.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(Child::as_text)
    }

    /// First direct child node of the given kind.
    pub fn first_of_kind(&self, kind: &str) -> Option<&Node> {
        self.child_nodes().find(|n| n.kind == kind)
    }

    /// Whether a child node of the given kind exists, optionally searching
    /// the whole subtree.
    pub fn has_kind(&self, kind: &str, recursive: bool) -> bool {
        if self.child_nodes().any(|n| n.kind == kind) {
            return true;
        }
        recursive && self.child_nodes().any(|n| n.has_kind(kind, true))
    }

    /// Remove and return the first child node of the given kind. With
    /// `recursive`, descends depth-first when nothing matches at this
    /// level.
    pub fn remove_first_of_kind(&mut self, kind: &str, recursive: bool) -> Option<Node> {
        let position = self.children.iter().position(|c| c.is_kind(kind));
        if let Some(index) = position {
            if let Child::Node(node) = self.children.remove(index) {
                return Some(node);
            }
        }
        if recursive {
            for child in &mut self.children {
                if let Child::Node(node) = child {
                    if let Some(found) = node.remove_first_of_kind(kind, true) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }

    /// Remove and return every child node of the given kind, in document
    /// order. With `recursive`, descends into the children that remain;
    /// removed subtrees are not searched.
    pub fn remove_all_of_kind(&mut self, kind: &str, recursive: bool) -> Vec<Node> {
        let mut removed = Vec::new();
        let mut index = 0;
        while index < self.children.len() {
            if self.children[index].is_kind(kind) {
                if let Child::Node(node) = self.children.remove(index) {
                    removed.push(node);
                }
                continue;
            }
            if recursive {
                if let Child::Node(node) = &mut self.children[index] {
                    removed.extend(node.remove_all_of_kind(kind, true));
                }
            }
            index += 1;
        }
        removed
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node('{}', {} params, {} children)",
            self.kind,
            self.params.len(),
            self.children.len()
        )
    }
}
