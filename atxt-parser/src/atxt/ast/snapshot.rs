//! Tree snapshots - a normalized JSON representation of the node tree.
//!
//! The tree serializes to a compact shape suitable for tooling and test
//! assertions: text children appear as plain JSON strings, nodes as
//! objects. Each serializer consuming the snapshot can focus on
//! presentation without reimplementing tree traversal.

use super::node::Node;

/// Serialize a tree to pretty-printed JSON.
pub fn to_json(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Deserialize a tree from its JSON snapshot form.
pub fn from_json(json: &str) -> serde_json::Result<Node> {
    serde_json::from_str(json)
}
