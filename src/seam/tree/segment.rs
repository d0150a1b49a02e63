//! Segment node
//!
//! A segment is one node of the hierarchical text structure being
//! transformed: it has a kind (paragraph, section, ...), the text content
//! the transformation layer works on, an owned attribute map, and its
//! position in the tree. Parent and child links are plain arena ids; all
//! linking goes through [`SegmentTree`](super::arena::SegmentTree) so the
//! tree stays acyclic and consistent.

use super::super::attribute::Attribute;
use super::super::attrmap::AttributeMap;
use super::super::value::Value;
use std::fmt;

/// Arena handle addressing one segment of a [`SegmentTree`](super::arena::SegmentTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(u32);

impl SegmentId {
    pub(crate) fn new(index: usize) -> Self {
        SegmentId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the segment tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Node sort, e.g. "document", "section", "paragraph".
    pub kind: String,
    /// Text content. The tree carries it but never interprets it; meaning
    /// belongs to the transformation layer.
    pub text: String,
    /// Local attributes. At most one value per attribute.
    pub attrs: AttributeMap,
    parent: Option<SegmentId>,
    children: Vec<SegmentId>,
}

impl Segment {
    pub(crate) fn new(kind: impl Into<String>) -> Self {
        Segment {
            kind: kind.into(),
            text: String::new(),
            attrs: AttributeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Local attribute lookup; exactly `self.attrs.get(attr)`.
    pub fn attribute(&self, attr: &Attribute) -> Option<&Value> {
        self.attrs.get(attr)
    }

    /// Write into the local map. Never writes through to ancestors:
    /// setting an attribute here cannot change what a parent or sibling
    /// resolves.
    pub fn set_attribute(&mut self, attr: impl Into<Attribute>, value: impl Into<Value>) {
        self.attrs.set(attr, value);
    }

    /// The parent's id, or `None` for the root and detached segments.
    pub fn parent(&self) -> Option<SegmentId> {
        self.parent
    }

    /// Ordered child ids.
    pub fn children(&self) -> &[SegmentId] {
        &self.children
    }

    pub(crate) fn set_parent(&mut self, parent: Option<SegmentId>) {
        self.parent = parent;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<SegmentId> {
        &mut self.children
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}, {} children)", self.kind, self.children.len())
    }
}
