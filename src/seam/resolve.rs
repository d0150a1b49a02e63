//! Attribute resolution with inheritance
//!
//! The effective value of an attribute at a segment is found by checking
//! the segment's own map first, then each ancestor in order, stopping at
//! the first map that contains the key. A local value therefore shadows an
//! inherited one of the same name, and the root resolves exactly like a
//! plain local lookup.
//!
//! Resolution is deliberately uncached: the result depends only on the
//! chain of maps at the time of the call, so mutating an ancestor is
//! observed by every later lookup. A memo layer would need invalidation
//! hooks on every ancestor write; the walk stays O(depth) instead.
//!
//! Termination does not rest on this module: the tree's mutation API keeps
//! parent chains acyclic, so the walk is bounded by tree depth. A debug
//! assertion still bounds the step count by the arena size; overrunning it
//! would mean a broken invariant inside the crate, not a caller error.

use super::attribute::Attribute;
use super::tree::{SegmentId, SegmentRef, SegmentTree};
use super::value::Value;

/// Resolve `attr` at `id`, walking ancestors until found.
///
/// Returns `None` only when no map between the segment and the root
/// contains the key. Unknown ids resolve like unset attributes.
pub fn inherited<'t>(tree: &'t SegmentTree, id: SegmentId, attr: &Attribute) -> Option<&'t Value> {
    inherited_from(tree, id, attr).map(|(_, value)| value)
}

/// Resolve `attr` at `id`, also reporting which segment supplied the
/// value. Passes use this to tell a local value from an inherited one.
pub fn inherited_from<'t>(
    tree: &'t SegmentTree,
    id: SegmentId,
    attr: &Attribute,
) -> Option<(SegmentId, &'t Value)> {
    let mut steps = 0usize;
    let mut current = tree.get(id)?;
    loop {
        if let Some(value) = current.attribute(attr) {
            return Some((current.id(), value));
        }
        debug_assert!(
            steps < tree.len(),
            "parent chain longer than the arena; tree invariant broken"
        );
        steps += 1;
        current = current.parent()?;
    }
}

/// Iterate from `id`'s parent up to the root.
pub fn ancestors(tree: &SegmentTree, id: SegmentId) -> Ancestors<'_> {
    Ancestors {
        next: tree.get(id).and_then(|segment| segment.parent()),
    }
}

/// Iterator over a segment's ancestors, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<SegmentRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = SegmentRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
