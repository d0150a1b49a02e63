//! Pass contract
//!
//! A pass is a named transformation step over a segment tree. Passes
//! communicate through attributes: earlier passes annotate segments,
//! later passes resolve those annotations (locally or inherited) to make
//! their decisions.

use super::super::tree::{SegmentId, SegmentTree};
use std::fmt;

/// Error raised by a failing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassError {
    /// A segment was missing context the pass requires: the attribute was
    /// not set on the segment or any of its ancestors.
    MissingContext {
        segment: SegmentId,
        attribute: String,
    },
    /// Pass-specific failure.
    Failed(String),
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassError::MissingContext { segment, attribute } => {
                write!(
                    f,
                    "Segment {} resolves no value for '{}'",
                    segment, attribute
                )
            }
            PassError::Failed(msg) => write!(f, "Pass failed: {}", msg),
        }
    }
}

impl std::error::Error for PassError {}

/// A named unit of work over a segment tree.
pub trait Pass {
    /// Name reported in pipeline errors and reports.
    fn name(&self) -> &str;

    /// Run the pass, mutating or annotating the tree.
    fn run(&mut self, tree: &mut SegmentTree) -> Result<(), PassError>;
}

/// Adapter turning a closure into a [`Pass`].
pub struct FnPass<F> {
    name: String,
    f: F,
}

impl<F> FnPass<F>
where
    F: FnMut(&mut SegmentTree) -> Result<(), PassError>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        FnPass {
            name: name.into(),
            f,
        }
    }
}

impl<F> Pass for FnPass<F>
where
    F: FnMut(&mut SegmentTree) -> Result<(), PassError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, tree: &mut SegmentTree) -> Result<(), PassError> {
        (self.f)(tree)
    }
}

impl<F> fmt::Debug for FnPass<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPass").field("name", &self.name).finish()
    }
}
