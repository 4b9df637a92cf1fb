//! Workflow module
//!
//! This module contains components for orchestrating a run over a skin.

mod context;
mod engine;

pub use context::{OperationType, PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{InvertOptions, RunOutcome, copy_tree, invert_file, run};
