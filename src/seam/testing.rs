//! Testing utilities for segment trees
//!
//! # Tree Testing Guidelines
//!
//! Tests build trees through the [`fixtures`] builder and verify them with
//! [`assert_tree`](assertions::assert_tree). The two are meant to be used
//! together: the builder keeps construction declarative (shape and
//! attributes in one expression), the assertions keep verification deep
//! (structure and resolution, not just counts).
//!
//! ```rust,ignore
//! use seam::seam::testing::fixtures::seg;
//! use seam::seam::testing::assert_tree;
//!
//! let tree = seg("document")
//!     .attr("lang", "en")
//!     .child(seg("paragraph").text("Hello").attr("indent", 2))
//!     .build();
//!
//! assert_tree(&tree).segment(&[0], |s| {
//!     s.kind("paragraph").inherits("lang", "en").has_attr("indent", 2);
//! });
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_tree, SegmentAssertion, TreeAssertion};
pub use fixtures::{seg, standard_document, SegmentSpec};
