//! Workflow engine
//!
//! This module walks a skin folder and mirrors it into the destination.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};

use crate::discovery::{EntryKind, SkinEntry, scan_directory};
use crate::errors::{destination_inside_source_error, file_operation_error, path_operation_error};
use crate::file_ops::{CopyOutcome, copy_binary_asset, create_directory, write_inverted_asset};
use crate::inverter::invert_text;

use super::context::{OperationType, WorkflowContext};

/// Options for a run
#[derive(Debug, Clone)]
pub struct InvertOptions {
    /// Skin folder, or a single text file
    pub source: PathBuf,
    /// Root of the destination tree
    pub destination: PathBuf,
    /// Whether to only simulate file operations
    pub dry_run: bool,
}

/// What a run produced
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// Inverted text of a single source file, meant for stdout
    SingleFile(String),
    /// Statistics of a tree walk
    Tree(WorkflowContext),
}

/// Runs the inverter on a skin folder or on a single file
///
/// A source that is not a directory is read as one text file and its
/// inverted text is returned instead of being written anywhere.
///
/// # Errors
/// * Returns the first I/O error met; files written before it stay on disk
pub fn run(options: &InvertOptions) -> Result<RunOutcome> {
    if options.source.is_dir() {
        let context = copy_tree(&options.source, &options.destination, options.dry_run)?;
        Ok(RunOutcome::Tree(context))
    } else {
        Ok(RunOutcome::SingleFile(invert_file(&options.source)?))
    }
}

/// Reads a text file and returns it with inverted colors
pub fn invert_file(path: &Path) -> Result<String> {
    debug!("Inverting single file: {}", path.display());
    let text = read_to_string(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;
    Ok(invert_text(&text))
}

/// Mirrors a skin folder into `destination_root`
///
/// Walks `source_root` depth first. Directories are created before their
/// content, binary assets are copied unless already present and every
/// other file is rewritten with inverted colors.
///
/// # Arguments
/// * `source_root` - The skin to invert
/// * `destination_root` - Where the mirrored tree is written
/// * `dry_run` - Record and log the operations without touching the disk
///
/// # Returns
/// * `Result<WorkflowContext>` - Statistics and, for a dry run, the planned operations
///
/// # Errors
/// * Returns an error, before writing anything, if the destination is the
///   source or lies inside it
/// * Returns the first I/O error met during the walk
pub fn copy_tree(
    source_root: &Path,
    destination_root: &Path,
    dry_run: bool,
) -> Result<WorkflowContext> {
    let source = resolve_path(source_root)?;
    let destination = resolve_path(destination_root)?;
    if destination.starts_with(&source) {
        return Err(destination_inside_source_error(source, destination).into());
    }

    let mut context = WorkflowContext::new(dry_run);

    if create_directory(destination_root, !dry_run)? {
        debug!("Created destination root: {}", destination_root.display());
    }

    walk_directory(source_root, destination_root, &mut context)?;

    Ok(context)
}

fn walk_directory(
    source_dir: &Path,
    destination_dir: &Path,
    context: &mut WorkflowContext,
) -> Result<()> {
    for entry in scan_directory(source_dir)? {
        let target = entry.destination_in(destination_dir);
        match entry.kind {
            EntryKind::Directory => {
                info!("create dir {}", target.display());
                if create_directory(&target, !context.dry_run)? {
                    context.increment_directories_created();
                    record_plan(context, &entry, &target, OperationType::CreateDirectory);
                }
                walk_directory(&entry.path, &target, context)?;
            }
            EntryKind::BinaryAsset => {
                info!(
                    "copying from {} to {}",
                    entry.path.display(),
                    target.display()
                );
                match copy_binary_asset(&entry.path, &target, !context.dry_run)? {
                    CopyOutcome::Skipped => context.increment_files_skipped(),
                    CopyOutcome::Copied | CopyOutcome::Planned => {
                        context.increment_files_copied();
                        record_plan(context, &entry, &target, OperationType::Copy);
                    }
                }
            }
            EntryKind::TextAsset => {
                write_inverted_asset(&entry.path, &target, !context.dry_run)?;
                context.increment_files_inverted();
                record_plan(context, &entry, &target, OperationType::Invert);
            }
        }
    }

    Ok(())
}

/// Absolute, symlink-free form of a path that may not exist yet
///
/// The longest existing ancestor is canonicalized and the missing
/// components are appended to it.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve"))?;

    for ancestor in absolute.ancestors() {
        if ancestor.exists() {
            let canonical = ancestor
                .canonicalize()
                .map_err(|e| file_operation_error(e, ancestor.to_path_buf(), "resolve"))?;
            let missing = absolute
                .strip_prefix(ancestor)
                .map_err(|_| path_operation_error(absolute.clone(), "resolve"))?;
            return Ok(canonical.join(missing));
        }
    }

    Ok(absolute)
}

fn record_plan(
    context: &mut WorkflowContext,
    entry: &SkinEntry,
    target: &Path,
    operation_type: OperationType,
) {
    if context.dry_run {
        context.add_planned_operation(entry.path.clone(), target.to_path_buf(), operation_type);
    }
}
