//! Pass chaining
//!
//! Executes a fixed sequence of passes over one tree, stopping at the
//! first failure with the failing pass named in the error.

use super::super::tree::SegmentTree;
use super::pass::{Pass, PassError};
use std::fmt;

/// Error raised when a pipeline run stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    PassFailed { pass: String, error: PassError },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::PassFailed { pass, error } => {
                write!(f, "Pass '{}' failed: {}", pass, error)
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Names of the passes that ran, in order.
    pub executed: Vec<String>,
}

/// An ordered chain of passes.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass (builder style).
    pub fn with_pass(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Append a boxed pass.
    pub fn push(&mut self, pass: Box<dyn Pass>) {
        self.passes.push(pass);
    }

    /// Number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Whether the pipeline has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass in order over `tree`. Stops at the first failure;
    /// passes after the failing one do not run.
    pub fn run(&mut self, tree: &mut SegmentTree) -> Result<PassReport, PipelineError> {
        let mut report = PassReport::default();
        for pass in &mut self.passes {
            pass.run(tree).map_err(|error| PipelineError::PassFailed {
                pass: pass.name().to_string(),
                error,
            })?;
            report.executed.push(pass.name().to_string());
        }
        Ok(report)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.passes.iter().map(|p| p.name()).collect();
        f.debug_struct("Pipeline").field("passes", &names).finish()
    }
}
