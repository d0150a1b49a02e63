//! Snapshot building for segment trees
//!
//! The snapshot is the canonical normalized view of a (sub)tree: kind,
//! text, name-sorted attributes, children in document order. Serializers
//! and test assertions consume the snapshot rather than re-walking the
//! tree, so every rendering agrees on structure and ordering.

use super::super::value::Value;
use super::arena::{SegmentRef, SegmentTree};
use super::segment::SegmentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Normalized view of one segment and its descendants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    /// Render as an indented outline, one segment per line:
    /// kind, then quoted text if any, then `[name=value, ...]` if any.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_line(&mut out, 0);
        out
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_line(&self, out: &mut String, depth: usize) {
        if !out.is_empty() {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&self.kind);
        if !self.text.is_empty() {
            // Infallible for String targets
            let _ = write!(out, " {:?}", self.text);
        }
        if !self.attrs.is_empty() {
            out.push_str(" [");
            let mut first = true;
            for (name, value) in &self.attrs {
                if !first {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}={}", name, value);
                first = false;
            }
            out.push(']');
        }
        for child in &self.children {
            child.write_line(out, depth + 1);
        }
    }
}

/// Snapshot the whole tree from the root.
pub fn snapshot_tree(tree: &SegmentTree) -> TreeSnapshot {
    build(tree.root())
}

/// Snapshot the subtree rooted at `id`. Unknown ids yield `None`.
pub fn snapshot_segment(tree: &SegmentTree, id: SegmentId) -> Option<TreeSnapshot> {
    tree.get(id).map(build)
}

fn build(segment: SegmentRef<'_>) -> TreeSnapshot {
    let attrs = segment
        .attrs()
        .sorted_iter()
        .map(|(attr, value)| (attr.name().to_string(), value.clone()))
        .collect();
    TreeSnapshot {
        kind: segment.kind().to_string(),
        text: segment.text().to_string(),
        attrs,
        children: segment.children().map(build).collect(),
    }
}
