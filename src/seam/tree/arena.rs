//! Arena-backed segment tree
//!
//! The tree owns every segment in a flat arena and addresses them by
//! [`SegmentId`]. Children are owned, ordered id lists; the parent link is
//! a plain back-index, so there are no ownership cycles to manage. All
//! linking goes through this type, which is what upholds the structural
//! invariants:
//!
//! - The tree is acyclic and rooted: parent chains terminate at the root.
//! - A segment has at most one parent; parent and child lists agree.
//! - The root is never attached under another segment.
//!
//! Segments may be created detached (`add`) and attached later; attributes
//! can be set at any point before or after attachment. `detach` unlinks a
//! subtree but keeps its storage; dropping the tree drops every segment,
//! attached or not.

use super::super::attribute::Attribute;
use super::super::attrmap::AttributeMap;
use super::super::resolve;
use super::super::resolve::Ancestors;
use super::super::value::Value;
use super::segment::{Segment, SegmentId};
use std::fmt;

/// Error raised by the structural mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The id does not address a segment of this tree.
    UnknownSegment(SegmentId),
    /// The segment already has a parent; detach it first.
    AlreadyAttached { child: SegmentId, parent: SegmentId },
    /// Linking would close a cycle: the prospective parent is the segment
    /// itself or one of its descendants.
    WouldCycle { parent: SegmentId, child: SegmentId },
    /// The root cannot be attached under another segment.
    RootAttachment(SegmentId),
    /// The segment has no parent to detach from.
    NotAttached(SegmentId),
    /// Child index past the end of the parent's child list.
    IndexOutOfBounds {
        parent: SegmentId,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownSegment(id) => write!(f, "Unknown segment {}", id),
            TreeError::AlreadyAttached { child, parent } => {
                write!(f, "Segment {} is already attached to {}", child, parent)
            }
            TreeError::WouldCycle { parent, child } => {
                write!(f, "Attaching {} under {} would create a cycle", child, parent)
            }
            TreeError::RootAttachment(id) => {
                write!(f, "The root segment {} cannot be attached", id)
            }
            TreeError::NotAttached(id) => write!(f, "Segment {} has no parent", id),
            TreeError::IndexOutOfBounds { parent, index, len } => {
                write!(
                    f,
                    "Index {} out of bounds for segment {} with {} children",
                    index, parent, len
                )
            }
        }
    }
}

impl std::error::Error for TreeError {}

/// The segment arena and the only mutation surface over tree shape.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTree {
    nodes: Vec<Segment>,
}

impl SegmentTree {
    /// Create a tree holding a single root segment of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        SegmentTree {
            nodes: vec![Segment::new(kind)],
        }
    }

    /// The root's id. Stable for the lifetime of the tree.
    pub fn root_id(&self) -> SegmentId {
        SegmentId::new(0)
    }

    /// Read handle on the root.
    pub fn root(&self) -> SegmentRef<'_> {
        SegmentRef {
            tree: self,
            id: self.root_id(),
        }
    }

    /// Create a detached segment. It forms its own subtree until attached.
    pub fn add(&mut self, kind: impl Into<String>) -> SegmentId {
        let id = SegmentId::new(self.nodes.len());
        self.nodes.push(Segment::new(kind));
        id
    }

    /// Create a detached segment carrying text content.
    pub fn add_text(&mut self, kind: impl Into<String>, text: impl Into<String>) -> SegmentId {
        let id = SegmentId::new(self.nodes.len());
        self.nodes.push(Segment::new(kind).with_text(text));
        id
    }

    /// Number of segments in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` addresses a segment of this tree.
    pub fn contains(&self, id: SegmentId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Read handle on a segment.
    pub fn get(&self, id: SegmentId) -> Option<SegmentRef<'_>> {
        if self.contains(id) {
            Some(SegmentRef { tree: self, id })
        } else {
            None
        }
    }

    /// Borrow a segment.
    pub fn segment(&self, id: SegmentId) -> Result<&Segment, TreeError> {
        self.nodes
            .get(id.index())
            .ok_or(TreeError::UnknownSegment(id))
    }

    /// Mutably borrow a segment. Attributes, kind and text are free to
    /// mutate; tree shape is not reachable from here.
    pub fn segment_mut(&mut self, id: SegmentId) -> Result<&mut Segment, TreeError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(TreeError::UnknownSegment(id))
    }

    /// Append `child` at the end of `parent`'s child list.
    pub fn append_child(&mut self, parent: SegmentId, child: SegmentId) -> Result<(), TreeError> {
        self.check_link(parent, child)?;
        self.nodes[parent.index()].children_mut().push(child);
        self.nodes[child.index()].set_parent(Some(parent));
        Ok(())
    }

    /// Insert `child` at `index` in `parent`'s child list.
    pub fn insert_child(
        &mut self,
        parent: SegmentId,
        index: usize,
        child: SegmentId,
    ) -> Result<(), TreeError> {
        self.check_link(parent, child)?;
        let len = self.nodes[parent.index()].children().len();
        if index > len {
            return Err(TreeError::IndexOutOfBounds { parent, index, len });
        }
        self.nodes[parent.index()].children_mut().insert(index, child);
        self.nodes[child.index()].set_parent(Some(parent));
        Ok(())
    }

    /// Unlink `child` from its parent. The subtree under `child` stays
    /// intact and stays in the arena; it can be re-attached elsewhere.
    pub fn detach(&mut self, child: SegmentId) -> Result<(), TreeError> {
        self.segment(child)?;
        let parent = self.nodes[child.index()]
            .parent()
            .ok_or(TreeError::NotAttached(child))?;
        self.nodes[parent.index()]
            .children_mut()
            .retain(|&id| id != child);
        self.nodes[child.index()].set_parent(None);
        Ok(())
    }

    /// Local attribute lookup. Total: an unknown id resolves like an
    /// attribute that is not set.
    pub fn attribute(&self, id: SegmentId, attr: &Attribute) -> Option<&Value> {
        self.get(id)?.attribute(attr)
    }

    /// Resolve `attr` with inheritance: the segment's own map first, then
    /// each ancestor up to the root, first hit wins. Uncached; see
    /// [`resolve`](super::super::resolve).
    pub fn inherited(&self, id: SegmentId, attr: &Attribute) -> Option<&Value> {
        resolve::inherited(self, id, attr)
    }

    /// Like [`inherited`](Self::inherited), also reporting which segment
    /// supplied the value.
    pub fn inherited_from(&self, id: SegmentId, attr: &Attribute) -> Option<(SegmentId, &Value)> {
        resolve::inherited_from(self, id, attr)
    }

    /// Write an attribute into the segment's own map.
    pub fn set_attribute(
        &mut self,
        id: SegmentId,
        attr: impl Into<Attribute>,
        value: impl Into<Value>,
    ) -> Result<(), TreeError> {
        self.segment_mut(id)?.attrs.set(attr, value);
        Ok(())
    }

    /// Iterate from `id`'s parent up to the root.
    pub fn ancestors(&self, id: SegmentId) -> Ancestors<'_> {
        resolve::ancestors(self, id)
    }

    /// Depth-first traversal of the subtree rooted at `id`, starting with
    /// `id` itself, children in order.
    pub fn descendants(&self, id: SegmentId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: if self.contains(id) { vec![id] } else { Vec::new() },
        }
    }

    /// Depth-first traversal of the whole tree from the root.
    pub fn walk(&self) -> Descendants<'_> {
        self.descendants(self.root_id())
    }

    fn check_link(&self, parent: SegmentId, child: SegmentId) -> Result<(), TreeError> {
        self.segment(parent)?;
        self.segment(child)?;
        if child == self.root_id() {
            return Err(TreeError::RootAttachment(child));
        }
        if let Some(existing) = self.nodes[child.index()].parent() {
            return Err(TreeError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        // Walk up from the prospective parent; meeting the child means the
        // child is an ancestor and linking would close a cycle.
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == child {
                return Err(TreeError::WouldCycle { parent, child });
            }
            current = self.nodes[id.index()].parent();
        }
        Ok(())
    }
}

/// Borrowed handle pairing a tree with a valid segment id.
///
/// This is the read API of a segment in context: local and inherited
/// lookups, parent and child navigation.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRef<'a> {
    tree: &'a SegmentTree,
    id: SegmentId,
}

impl<'a> SegmentRef<'a> {
    fn node(self) -> &'a Segment {
        &self.tree.nodes[self.id.index()]
    }

    /// The segment's id in its tree.
    pub fn id(self) -> SegmentId {
        self.id
    }

    /// The tree this handle reads from.
    pub fn tree(self) -> &'a SegmentTree {
        self.tree
    }

    /// Node kind.
    pub fn kind(self) -> &'a str {
        &self.node().kind
    }

    /// Text content.
    pub fn text(self) -> &'a str {
        &self.node().text
    }

    /// The segment's own attribute map.
    pub fn attrs(self) -> &'a AttributeMap {
        &self.node().attrs
    }

    /// Local attribute lookup.
    pub fn attribute(self, attr: &Attribute) -> Option<&'a Value> {
        self.node().attribute(attr)
    }

    /// Resolve `attr` with inheritance from this segment upward.
    pub fn inherited(self, attr: &Attribute) -> Option<&'a Value> {
        resolve::inherited(self.tree, self.id, attr)
    }

    /// Like [`inherited`](Self::inherited), also reporting the supplier.
    pub fn inherited_from(self, attr: &Attribute) -> Option<(SegmentId, &'a Value)> {
        resolve::inherited_from(self.tree, self.id, attr)
    }

    /// The parent segment, if attached.
    pub fn parent(self) -> Option<SegmentRef<'a>> {
        let parent = self.node().parent()?;
        Some(SegmentRef {
            tree: self.tree,
            id: parent,
        })
    }

    /// Whether this segment is the tree root.
    pub fn is_root(self) -> bool {
        self.id == self.tree.root_id()
    }

    /// Ordered child handles.
    pub fn children(self) -> impl Iterator<Item = SegmentRef<'a>> {
        let tree = self.tree;
        self.node()
            .children()
            .iter()
            .map(move |&id| SegmentRef { tree, id })
    }

    /// The `index`-th child, if any.
    pub fn child(self, index: usize) -> Option<SegmentRef<'a>> {
        let id = *self.node().children().get(index)?;
        Some(SegmentRef {
            tree: self.tree,
            id,
        })
    }

    /// Number of children.
    pub fn child_count(self) -> usize {
        self.node().children().len()
    }
}

impl fmt::Display for SegmentRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.node())
    }
}

/// Depth-first iterator over a subtree, in document order.
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a SegmentTree,
    stack: Vec<SegmentId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = SegmentRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id.index()];
        // Push in reverse so the first child is visited next.
        for &child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(SegmentRef {
            tree: self.tree,
            id,
        })
    }
}
