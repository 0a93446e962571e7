//! Read-only selections with parent tracking.

use super::{FilteredView, SelectionError};
use crate::atxt::ast::{Child, Node};
use once_cell::sync::Lazy;
use std::future::Future;

/// Shared sentinel returned by `select` when nothing matches.
static EMPTY_NODE: Lazy<Node> = Lazy::new(Node::default);

/// A child handed to [`Selection::transform`]: node children arrive
/// wrapped as selections, text children pass through unchanged.
pub enum SelectionChild<'a> {
    Node(Selection<'a>),
    Text(&'a str),
}

/// A read-only view onto a node plus the chain of enclosing nodes. A
/// selection never owns its node; it is a cheap, stateless wrapper created
/// ad hoc around any part of a tree.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    node: &'a Node,
    ancestors: Vec<&'a Node>,
}

impl<'a> Selection<'a> {
    pub fn new(node: &'a Node) -> Self {
        Selection {
            node,
            ancestors: Vec::new(),
        }
    }

    pub(crate) fn with_ancestors(node: &'a Node, ancestors: Vec<&'a Node>) -> Self {
        Selection { node, ancestors }
    }

    /// The sentinel selection: empty kind, no params, no children, no
    /// parent.
    pub fn empty() -> Selection<'static> {
        Selection {
            node: &EMPTY_NODE,
            ancestors: Vec::new(),
        }
    }

    /// Whether this is the sentinel returned by a failed `select`.
    pub fn is_empty(&self) -> bool {
        std::ptr::eq(self.node, &*EMPTY_NODE)
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn kind(&self) -> &'a str {
        &self.node.kind
    }

    pub fn params(&self) -> &'a [String] {
        &self.node.params
    }

    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.node.params.get(index).map(String::as_str)
    }

    pub fn children(&self) -> &'a [Child] {
        &self.node.children
    }

    /// The enclosing selection, if this one was reached through a parent.
    pub fn parent(&self) -> Option<Selection<'a>> {
        self.ancestors.split_last().map(|(&parent, rest)| Selection {
            node: parent,
            ancestors: rest.to_vec(),
        })
    }

    fn child_selection(&self, node: &'a Node) -> Selection<'a> {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(self.node);
        Selection { node, ancestors }
    }

    /// Whether a child of the given kind exists, directly or anywhere in
    /// the subtree.
    pub fn has(&self, kind: &str, recursive: bool) -> bool {
        self.node.has_kind(kind, recursive)
    }

    /// First matching child as a selection, or the empty sentinel when
    /// nothing matches.
    pub fn select(&self, kind: &str, recursive: bool) -> Selection<'a> {
        self.find_first(kind, recursive)
            .unwrap_or_else(|| Selection::empty())
    }

    /// First matching child, failing when nothing matches.
    pub fn try_select(&self, kind: &str, recursive: bool) -> Result<Selection<'a>, SelectionError> {
        self.find_first(kind, recursive)
            .ok_or_else(|| SelectionError::RequiredMissing {
                kind: kind.to_string(),
            })
    }

    fn find_first(&self, kind: &str, recursive: bool) -> Option<Selection<'a>> {
        for node in self.node.child_nodes() {
            if node.kind == kind {
                return Some(self.child_selection(node));
            }
        }
        if recursive {
            for node in self.node.child_nodes() {
                if let Some(found) = self.child_selection(node).find_first(kind, true) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Every matching child in document order: a node's direct matches
    /// come before anything found by descending into its children.
    pub fn select_all(&self, kinds: &[&str], recursive: bool) -> Vec<Selection<'a>> {
        let mut out = Vec::new();
        self.collect_matches(kinds, recursive, &mut out);
        out
    }

    /// Like `select_all`, but failing when nothing matches at all.
    pub fn try_select_all(
        &self,
        kinds: &[&str],
        recursive: bool,
    ) -> Result<Vec<Selection<'a>>, SelectionError> {
        let matches = self.select_all(kinds, recursive);
        if matches.is_empty() {
            return Err(SelectionError::RequiredMissing {
                kind: kinds.join("|"),
            });
        }
        Ok(matches)
    }

    fn collect_matches(&self, kinds: &[&str], recursive: bool, out: &mut Vec<Selection<'a>>) {
        for node in self.node.child_nodes() {
            if kinds.contains(&node.kind.as_str()) {
                out.push(self.child_selection(node));
            }
        }
        if recursive {
            for node in self.node.child_nodes() {
                self.child_selection(node)
                    .collect_matches(kinds, recursive, out);
            }
        }
    }

    /// A copy of this node with children reduced to those the predicate
    /// keeps. The copy is disconnected from the tree, so the returned view
    /// is read-only by construction.
    pub fn filter(&self, mut keep: impl FnMut(&Child) -> bool) -> FilteredView {
        let node = Node {
            kind: self.node.kind.clone(),
            params: self.node.params.clone(),
            children: self
                .node
                .children
                .iter()
                .filter(|child| keep(child))
                .cloned()
                .collect(),
        };
        FilteredView::new(node)
    }

    /// Filter keeping only node children of the given kinds.
    pub fn filter_kinds(&self, kinds: &[&str]) -> FilteredView {
        self.filter(|child| {
            child
                .as_node()
                .is_some_and(|node| kinds.contains(&node.kind.as_str()))
        })
    }

    /// Apply `f` to every child in order, wrapping node children as
    /// selections and passing text through unchanged.
    pub fn transform<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(SelectionChild<'a>) -> T,
    {
        self.node
            .children
            .iter()
            .map(|child| match child {
                Child::Node(node) => f(SelectionChild::Node(self.child_selection(node))),
                Child::Text(text) => f(SelectionChild::Text(text)),
            })
            .collect()
    }

    /// Fan out an async operation per child and gather the results in
    /// input order, regardless of completion order. Cancellation, if
    /// needed, belongs to the per-child futures; the gather itself neither
    /// times out nor cancels.
    pub async fn transform_concurrent<T, F, Fut>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(SelectionChild<'a>) -> Fut,
        Fut: Future<Output = T>,
    {
        let pending: Vec<Fut> = self
            .node
            .children
            .iter()
            .map(|child| match child {
                Child::Node(node) => f(SelectionChild::Node(self.child_selection(node))),
                Child::Text(text) => f(SelectionChild::Text(text)),
            })
            .collect();
        futures::future::join_all(pending).await
    }
}
