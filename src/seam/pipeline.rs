//! Transformation pass infrastructure
//!
//! This module provides:
//! - The pass contract (`Pass`) - a named unit of work over a segment tree
//! - A runner (`Pipeline`) for chaining passes in order
//!
//! Concrete transformations live with their callers; the core only defines
//! the seam they plug into. A typical pass resolves inherited context,
//! computes something from it, and writes the result back as an attribute
//! for a later pass to consume.

pub mod pass;
pub mod runner;

// Re-export the pass API
pub use pass::{FnPass, Pass, PassError};
pub use runner::{PassReport, Pipeline, PipelineError};
