//! Workflow context
//!
//! This module defines the state collected while walking a skin.

use std::path::PathBuf;

/// Represents a planned file operation for dry-run mode
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOperation {
    /// The source path
    pub source: PathBuf,
    /// The destination path
    pub destination: PathBuf,
    /// The type of operation
    pub operation_type: OperationType,
}

/// Type of file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Directory creation
    CreateDirectory,
    /// Verbatim copy of a binary asset
    Copy,
    /// Color inversion of a text asset
    Invert,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of destination directories created
    pub directories_created: usize,
    /// Number of binary assets copied
    pub files_copied: usize,
    /// Number of binary assets left alone because the destination existed
    pub files_skipped: usize,
    /// Number of text assets written with inverted colors
    pub files_inverted: usize,
}

/// Context for the workflow
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Whether file operations are only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            ..Default::default()
        }
    }

    /// Records an operation that a dry run would have performed
    pub fn add_planned_operation(
        &mut self,
        source: PathBuf,
        destination: PathBuf,
        operation_type: OperationType,
    ) {
        self.planned_operations.push(PlannedOperation {
            source,
            destination,
            operation_type,
        });
    }

    pub fn increment_directories_created(&mut self) {
        self.stats.directories_created += 1;
    }

    pub fn increment_files_copied(&mut self) {
        self.stats.files_copied += 1;
    }

    pub fn increment_files_skipped(&mut self) {
        self.stats.files_skipped += 1;
    }

    pub fn increment_files_inverted(&mut self) {
        self.stats.files_inverted += 1;
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{}{} directories created, {} files copied, {} files skipped, {} files inverted",
            if self.dry_run { "Dry run: " } else { "" },
            self.stats.directories_created,
            self.stats.files_copied,
            self.stats.files_skipped,
            self.stats.files_inverted
        )
    }
}
