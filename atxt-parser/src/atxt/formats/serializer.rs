//! Serializer for the atxt format
//!
//!     Renders a node tree back to markup text. This is the structural
//!     inverse of the tree builder for canonical documents: re-parsing the
//!     output yields a structurally equal tree. It is not byte-faithful to
//!     arbitrary hand-written source; equivalent surface syntaxes (inline
//!     vs. multi-line forms) collapse to one canonical shape because the
//!     tree itself does not distinguish them.
//!
//!     Forms:
//!         no children                  @kind params
//!         exactly one text child       @kind params: content
//!         anything else                @kind params
//!                                          ...children, two columns deeper
//!
//!     Text re-escapes where it would otherwise re-lex as markup: a line
//!     starting with `#` renders as `\#`, a line starting with `@` renders
//!     through the empty-type inline escape form, and a node whose children
//!     are all text with a sigil anywhere in it renders through the `@@`
//!     unparsed form so the text comes back verbatim.

use crate::atxt::ast::{Child, Node};

const INDENT_STEP: &str = "  ";

/// Render a tree to canonical atxt text. The node is treated as a document
/// root: each child renders at zero indentation.
pub fn render(root: &Node) -> String {
    let mut lines = Vec::new();
    for child in &root.children {
        render_child(child, "", &mut lines);
    }
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_child(child: &Child, indent: &str, lines: &mut Vec<String>) {
    match child {
        Child::Text(text) => lines.push(text_line(text, indent)),
        Child::Node(node) => render_node(node, indent, lines),
    }
}

fn render_node(node: &Node, indent: &str, lines: &mut Vec<String>) {
    // Sigil-bearing text can only come back verbatim through an unparsed
    // region, and an unparsed region makes every child a text line.
    let raw = node.children.iter().all(|c| matches!(c, Child::Text(_)))
        && node
            .children
            .iter()
            .any(|c| matches!(c, Child::Text(t) if t.contains('@')));
    let head = head_of(node, if raw { "@@" } else { "@" });
    match node.children.as_slice() {
        [] => lines.push(format!("{indent}{head}")),
        [Child::Text(text)] => {
            if text.is_empty() {
                lines.push(format!("{indent}{head}"));
            } else {
                lines.push(format!("{indent}{head}: {text}"));
            }
        }
        children => {
            lines.push(format!("{indent}{head}"));
            let deeper = format!("{indent}{INDENT_STEP}");
            for child in children {
                match child {
                    Child::Text(text) if raw => {
                        if text.is_empty() {
                            lines.push(String::new());
                        } else {
                            lines.push(format!("{deeper}{text}"));
                        }
                    }
                    _ => render_child(child, &deeper, lines),
                }
            }
        }
    }
}

fn head_of(node: &Node, sigil: &str) -> String {
    let mut head = format!("{sigil}{}", node.kind);
    for param in &node.params {
        head.push(' ');
        if param.contains(' ') || param.contains(':') {
            head.push('[');
            head.push_str(param);
            head.push(']');
        } else {
            head.push_str(param);
        }
    }
    head
}

fn text_line(text: &str, indent: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if let Some(rest) = text.strip_prefix('@') {
        // Re-lexes as an empty-type inline escape, restoring the sigil.
        let mut escaped = format!("{indent}@[");
        for c in rest.chars() {
            match c {
                '[' => escaped.push_str("\\["),
                ']' => escaped.push_str("\\]"),
                _ => escaped.push(c),
            }
        }
        escaped.push(']');
        escaped
    } else if let Some(rest) = text.strip_prefix('#') {
        format!("{indent}\\#{rest}")
    } else {
        format!("{indent}{text}")
    }
}
