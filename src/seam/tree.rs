//! Segment tree structure
//!
//! This module provides:
//! - The arena-backed tree (`SegmentTree`) and its mutation surface
//! - Segment nodes addressed by id (`Segment`, `SegmentId`)
//! - Borrowed read handles (`SegmentRef`)
//! - Traversal (`Visitor`) and normalized snapshots (`TreeSnapshot`)

pub mod arena;
pub mod segment;
pub mod snapshot;
pub mod traits;

// Re-export the tree surface
pub use arena::{Descendants, SegmentRef, SegmentTree, TreeError};
pub use segment::{Segment, SegmentId};
pub use snapshot::{snapshot_segment, snapshot_tree, TreeSnapshot};
pub use traits::{visit, visit_from, Visitor};
