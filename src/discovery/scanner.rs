//! Directory scanning functionality
//!
//! This module contains functions for listing a skin folder and deciding
//! how each entry is handled.

use std::ffi::OsString;
use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::constants::BINARY_EXTENSIONS;
use crate::errors::{Result, file_operation_error, path_operation_error, unsupported_entry_error};

/// How an entry of the skin is reproduced in the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Mirrored and walked recursively
    Directory,
    /// Copied byte for byte, never overwritten
    BinaryAsset,
    /// Rewritten with inverted colors, always overwritten
    TextAsset,
}

/// An entry found while scanning a skin folder
#[derive(Debug, Clone)]
pub struct SkinEntry {
    /// The path to the entry
    pub path: PathBuf,
    /// The file name of the entry, reused in the destination
    pub name: OsString,
    /// How the entry is handled
    pub kind: EntryKind,
}

impl SkinEntry {
    /// Creates a new SkinEntry from a path
    ///
    /// # Errors
    /// * Returns an error if the path is neither a regular file nor a
    ///   directory (symlinks are followed)
    /// * Returns an error if the path has no file name
    pub fn new(path: PathBuf) -> Result<Self> {
        let kind = classify(&path)?;
        let name = path
            .file_name()
            .ok_or_else(|| path_operation_error(path.clone(), "get filename of"))?
            .to_os_string();

        Ok(SkinEntry { path, name, kind })
    }

    /// Path of this entry inside `destination_dir`
    pub fn destination_in(&self, destination_dir: &Path) -> PathBuf {
        destination_dir.join(&self.name)
    }
}

/// Checks whether a path has one of the binary asset extensions
///
/// The comparison is exact: `logo.png` is binary, `logo.PNG` is text.
pub fn is_binary_asset(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| BINARY_EXTENSIONS.contains(&extension))
}

fn classify(path: &Path) -> Result<EntryKind> {
    if path.is_file() {
        if is_binary_asset(path) {
            Ok(EntryKind::BinaryAsset)
        } else {
            Ok(EntryKind::TextAsset)
        }
    } else if path.is_dir() {
        Ok(EntryKind::Directory)
    } else {
        Err(unsupported_entry_error(path.to_path_buf()))
    }
}

/// Scans a skin directory
///
/// Returns every entry of `directory`, hidden ones included, sorted by
/// file name.
///
/// # Errors
/// Returns an error if the directory cannot be read or one of its entries
/// cannot be classified
pub fn scan_directory(directory: &Path) -> Result<Vec<SkinEntry>> {
    debug!("Scanning directory: {}", directory.display());

    let mut paths = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))?
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| file_operation_error(e, directory.to_path_buf(), "list"))
        })
        .collect::<Result<Vec<PathBuf>>>()?;
    paths.sort();

    let entries = paths
        .into_iter()
        .map(SkinEntry::new)
        .collect::<Result<Vec<SkinEntry>>>()?;

    trace!("Found {} entries in {}", entries.len(), directory.display());

    Ok(entries)
}
