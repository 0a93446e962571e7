//! Treeviz formatter for node trees
//!
//! Treeviz is a one-line-per-node visual rendering of a tree, for quick
//! scanning while debugging. Structure is encoded as indentation, two
//! spaces per nesting level:
//!
//!     ⧉ document
//!       @ note (2 params)
//!         ↵ first line
//!         @ tag
//!       ↵ closing line
//!
//! Icons: document root ⧉, annotated node @, text line ↵.

use crate::atxt::ast::{Child, Node};

const LABEL_WIDTH: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn node_label(node: &Node) -> String {
    if node.params.is_empty() {
        node.kind.clone()
    } else {
        format!("{} ({} params)", node.kind, node.params.len())
    }
}

/// Render a tree in treeviz form. The given node is shown as the document
/// line; children follow indented.
pub fn render_tree(root: &Node) -> String {
    let mut out = String::from("⧉ document\n");
    for child in &root.children {
        render_child(child, 1, &mut out);
    }
    out
}

fn render_child(child: &Child, level: usize, out: &mut String) {
    let indent = "  ".repeat(level);
    match child {
        Child::Text(text) => {
            let shown = if text.is_empty() { "(blank)" } else { text };
            out.push_str(&format!("{indent}↵ {}\n", truncate(shown, LABEL_WIDTH)));
        }
        Child::Node(node) => {
            out.push_str(&format!(
                "{indent}@ {}\n",
                truncate(&node_label(node), LABEL_WIDTH)
            ));
            for nested in &node.children {
                render_child(nested, level + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let root = Node::default().with_children(vec![
            Child::Node(
                Node::new("note")
                    .with_params(vec!["a".to_string(), "b".to_string()])
                    .with_children(vec!["body".into()]),
            ),
            Child::Text(String::new()),
        ]);
        let viz = render_tree(&root);
        assert_eq!(
            viz,
            "⧉ document\n  @ note (2 params)\n    ↵ body\n  ↵ (blank)\n"
        );
    }

    #[test]
    fn test_long_labels_truncate() {
        let long = "x".repeat(60);
        let root = Node::default().with_children(vec![Child::Text(long)]);
        let viz = render_tree(&root);
        assert!(viz.contains(&format!("↵ {}...", "x".repeat(40))));
    }
}
