//! Tree traversal traits - uniform access for passes and tooling
//!
//! Implement [`Visitor`] to walk a segment tree. The tree is homogeneous,
//! so there are just two hooks: one on the way down, one on the way up.
//! Default implementations are empty; override what you care about.
//!
//! # Example
//!
//! ```rust,ignore
//! struct KindCounter(usize);
//!
//! impl Visitor for KindCounter {
//!     fn enter_segment(&mut self, segment: SegmentRef<'_>) {
//!         if segment.kind() == "paragraph" {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut counter = KindCounter(0);
//! visit(&tree, &mut counter);
//! ```

use super::arena::{SegmentRef, SegmentTree};
use super::segment::SegmentId;

/// Visitor over segments, called in document order.
pub trait Visitor {
    /// Called before a segment's children are visited.
    fn enter_segment(&mut self, _segment: SegmentRef<'_>) {}

    /// Called after a segment's children have been visited.
    fn leave_segment(&mut self, _segment: SegmentRef<'_>) {}
}

/// Walk the whole tree from the root.
pub fn visit(tree: &SegmentTree, visitor: &mut dyn Visitor) {
    visit_from(tree, tree.root_id(), visitor);
}

/// Walk the subtree rooted at `id`. Unknown ids visit nothing.
pub fn visit_from(tree: &SegmentTree, id: SegmentId, visitor: &mut dyn Visitor) {
    let Some(segment) = tree.get(id) else {
        return;
    };
    visitor.enter_segment(segment);
    for child in segment.children() {
        visit_from(tree, child.id(), visitor);
    }
    visitor.leave_segment(segment);
}
