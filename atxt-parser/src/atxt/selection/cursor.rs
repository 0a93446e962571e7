//! Mutable cursors over a tree.

use super::view::Selection;
use crate::atxt::ast::{Child, Node};

fn resolve<'n>(root: &'n Node, path: &[usize]) -> &'n Node {
    let mut node = root;
    for &index in path {
        node = match &node.children[index] {
            Child::Node(n) => n,
            // paths are only ever recorded for node children
            Child::Text(_) => unreachable!("cursor path through a text child"),
        };
    }
    node
}

fn resolve_mut<'n>(root: &'n mut Node, path: &[usize]) -> &'n mut Node {
    let mut node = root;
    for &index in path {
        node = match &mut node.children[index] {
            Child::Node(n) => n,
            Child::Text(_) => unreachable!("cursor path through a text child"),
        };
    }
    node
}

fn find_path(node: &Node, kind: &str, recursive: bool) -> Option<Vec<usize>> {
    for (index, child) in node.children.iter().enumerate() {
        if child.is_kind(kind) {
            return Some(vec![index]);
        }
    }
    if recursive {
        for (index, child) in node.children.iter().enumerate() {
            if let Child::Node(nested) = child {
                if let Some(mut rest) = find_path(nested, kind, true) {
                    let mut path = vec![index];
                    path.append(&mut rest);
                    return Some(path);
                }
            }
        }
    }
    None
}

/// The write surface over a tree: holds the one exclusive borrow of the
/// root and addresses its target node by child-index path, so navigating
/// to a parent or child never needs a back-reference.
///
/// Edits touch the real tree immediately. For read-only fan-out, take
/// [`Cursor::selection`] instead.
#[derive(Debug)]
pub struct Cursor<'a> {
    root: &'a mut Node,
    path: Vec<usize>,
}

impl<'a> Cursor<'a> {
    pub fn new(root: &'a mut Node) -> Self {
        Cursor {
            root,
            path: Vec::new(),
        }
    }

    pub fn node(&self) -> &Node {
        resolve(self.root, &self.path)
    }

    fn node_mut(&mut self) -> &mut Node {
        resolve_mut(self.root, &self.path)
    }

    pub fn kind(&self) -> &str {
        &self.node().kind
    }

    pub fn params(&self) -> &[String] {
        &self.node().params
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.node().params.get(index).map(String::as_str)
    }

    pub fn children(&self) -> &[Child] {
        &self.node().children
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.node_mut().kind = kind.into();
    }

    pub fn set_params(&mut self, params: Vec<String>) {
        self.node_mut().params = params;
    }

    /// Replace one positional parameter, growing the list with empty
    /// strings if the index is past the end.
    pub fn set_param(&mut self, index: usize, value: impl Into<String>) {
        let params = &mut self.node_mut().params;
        if params.len() <= index {
            params.resize_with(index + 1, String::new);
        }
        params[index] = value.into();
    }

    pub fn set_children(&mut self, children: Vec<Child>) {
        self.node_mut().children = children;
    }

    /// Append a child (node or text).
    pub fn add(&mut self, child: impl Into<Child>) {
        self.node_mut().children.push(child.into());
    }

    /// A cursor onto the first child of the given kind, or `None` when
    /// nothing matches.
    pub fn select(&mut self, kind: &str, recursive: bool) -> Option<Cursor<'_>> {
        let found = find_path(self.node(), kind, recursive)?;
        let mut path = self.path.clone();
        path.extend(found);
        Some(Cursor {
            root: &mut *self.root,
            path,
        })
    }

    /// A cursor onto the enclosing node, or `None` at the root.
    pub fn parent(&mut self) -> Option<Cursor<'_>> {
        if self.path.is_empty() {
            return None;
        }
        Some(Cursor {
            root: &mut *self.root,
            path: self.path[..self.path.len() - 1].to_vec(),
        })
    }

    /// Remove this node from its parent and return it. Detaching the root
    /// removes nothing and returns `None`.
    pub fn detach(self) -> Option<Node> {
        let (last, parent_path) = self.path.split_last()?;
        let parent = resolve_mut(self.root, parent_path);
        match parent.children.remove(*last) {
            Child::Node(node) => Some(node),
            Child::Text(_) => unreachable!("cursor path through a text child"),
        }
    }

    /// Remove the child at the given index, if any.
    pub fn remove_child(&mut self, index: usize) -> Option<Child> {
        let children = &mut self.node_mut().children;
        if index < children.len() {
            Some(children.remove(index))
        } else {
            None
        }
    }

    /// Remove and return the first child node of the given kind; with
    /// `recursive`, descends depth-first when nothing matches directly.
    pub fn remove_child_of_type(&mut self, kind: &str, recursive: bool) -> Option<Node> {
        self.node_mut().remove_first_of_kind(kind, recursive)
    }

    /// Remove and return every child node of the given kind, in document
    /// order.
    pub fn remove_all_children_of_type(&mut self, kind: &str, recursive: bool) -> Vec<Node> {
        self.node_mut().remove_all_of_kind(kind, recursive)
    }

    /// A read-only selection of the same node, with the parent chain
    /// reconstructed from the path.
    pub fn selection(&self) -> Selection<'_> {
        let mut ancestors = Vec::new();
        let mut node: &Node = self.root;
        for &index in &self.path {
            ancestors.push(node);
            node = match &node.children[index] {
                Child::Node(n) => n,
                Child::Text(_) => unreachable!("cursor path through a text child"),
            };
        }
        Selection::with_ancestors(node, ancestors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::default().with_children(vec![
            Node::new("section")
                .with_children(vec![
                    Node::new("note").with_children(vec!["inner".into()]).into(),
                ])
                .into(),
            Node::new("note").into(),
        ])
    }

    #[test]
    fn test_set_and_read_back() {
        let mut root = sample();
        let mut cursor = Cursor::new(&mut root);
        let mut section = cursor.select("section", false).expect("section");
        section.set_kind("chapter");
        section.set_params(vec!["one".to_string()]);
        section.set_param(2, "three");
        assert_eq!(section.kind(), "chapter");
        assert_eq!(section.params(), ["one", "", "three"]);
        drop(section);
        assert!(root.has_kind("chapter", false));
    }

    #[test]
    fn test_add_appends() {
        let mut root = sample();
        let mut cursor = Cursor::new(&mut root);
        cursor.add("tail line");
        cursor.add(Node::new("extra"));
        assert_eq!(root.children.len(), 4);
        assert!(root.has_kind("extra", false));
    }

    #[test]
    fn test_select_recursive_and_parent() {
        let mut root = sample();
        let mut cursor = Cursor::new(&mut root);
        let mut inner = cursor.select("note", true).expect("note");
        assert_eq!(inner.children().len(), 0);
        // Direct match wins over the nested one.
        inner.add("marked");
        drop(inner);
        assert_eq!(
            root.first_of_kind("note").expect("note").children.len(),
            1
        );
    }

    #[test]
    fn test_nested_select_tracks_parent() {
        let mut root = sample();
        let mut cursor = Cursor::new(&mut root);
        let mut section = cursor.select("section", false).expect("section");
        let mut note = section.select("note", false).expect("note");
        let parent = note.parent().expect("parent");
        assert_eq!(parent.kind(), "section");
    }

    #[test]
    fn test_detach_removes_from_parent() {
        let mut root = sample();
        let mut cursor = Cursor::new(&mut root);
        let section = cursor.select("section", false).expect("section");
        let detached = section.detach().expect("node");
        assert_eq!(detached.kind, "section");
        assert!(!root.has_kind("section", false));
        assert!(root.has_kind("note", false));
    }

    #[test]
    fn test_detach_root_is_none() {
        let mut root = sample();
        assert!(Cursor::new(&mut root).detach().is_none());
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_remove_all_children_of_type() {
        let mut root = sample();
        let removed = Cursor::new(&mut root).remove_all_children_of_type("note", true);
        assert_eq!(removed.len(), 2);
        assert!(!root.has_kind("note", true));
    }

    #[test]
    fn test_selection_from_nested_cursor() {
        let mut root = sample();
        let mut cursor = Cursor::new(&mut root);
        let mut section = cursor.select("section", false).expect("section");
        let note = section.select("note", false).expect("note");
        let selection = note.selection();
        assert_eq!(selection.kind(), "note");
        assert_eq!(selection.parent().expect("parent").kind(), "section");
    }
}
