//! File operation functionality
//!
//! This module contains functions for creating the destination folders,
//! copying binary assets and writing inverted text assets.

use std::fs::{create_dir_all, read_to_string, write};
use std::path::Path;

use fs_extra::file::{CopyOptions, copy};
use log::debug;

use crate::errors::{Result, file_operation_error};
use crate::inverter::invert_text;

/// Result of handling a binary asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The asset was copied
    Copied,
    /// The destination already existed and was left alone
    Skipped,
    /// Dry run, the asset would have been copied
    Planned,
}

/// Creates a destination directory if it does not exist yet
///
/// # Arguments
/// * `target_path` - The directory to create
/// * `run_execution` - Whether to actually create it (true) or just simulate (false)
///
/// # Returns
/// * `Result<bool>` - Whether the directory was missing
pub fn create_directory(target_path: &Path, run_execution: bool) -> Result<bool> {
    if target_path.is_dir() {
        debug!("Directory already exists: {}", target_path.display());
        return Ok(false);
    }

    if run_execution {
        create_dir_all(target_path).map_err(|e| {
            file_operation_error(e, target_path.to_path_buf(), "create directory")
        })?;
    }

    Ok(true)
}

/// Copies a binary asset unless the destination already exists
///
/// An existing destination is never overwritten nor compared, whatever
/// its content.
///
/// # Errors
/// * Returns an error if the copy fails
pub fn copy_binary_asset(
    source_path: &Path,
    target_path: &Path,
    run_execution: bool,
) -> Result<CopyOutcome> {
    if target_path.exists() {
        debug!("Destination exists, not copying: {}", target_path.display());
        return Ok(CopyOutcome::Skipped);
    }

    if !run_execution {
        return Ok(CopyOutcome::Planned);
    }

    let options = CopyOptions::new().skip_exist(true);
    copy(source_path, target_path, &options).map_err(|e| {
        file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "copy")
    })?;

    Ok(CopyOutcome::Copied)
}

/// Writes the color-inverted version of a text asset
///
/// The destination is overwritten unconditionally.
///
/// # Errors
/// * Returns an error if the source cannot be read as UTF-8 text
/// * Returns an error if the destination cannot be written
pub fn write_inverted_asset(
    source_path: &Path,
    target_path: &Path,
    run_execution: bool,
) -> Result<()> {
    let text = read_to_string(source_path)
        .map_err(|e| file_operation_error(e, source_path.to_path_buf(), "read"))?;
    let inverted = invert_text(&text);

    if !run_execution {
        debug!(
            "Simulating inversion: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(());
    }

    debug!(
        "Inverting colors: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    write(target_path, inverted)
        .map_err(|e| file_operation_error(e, target_path.to_path_buf(), "write"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read;
    use tempfile::tempdir;

    #[test]
    fn test_create_directory() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("palesun").join("style");

        assert!(create_directory(&target, true).unwrap());
        assert!(target.is_dir());

        // Existing directories are fine
        assert!(!create_directory(&target, true).unwrap());
    }

    #[test]
    fn test_create_directory_dry_run() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("palesun");

        assert!(create_directory(&target, false).unwrap());
        assert!(!target.exists());
    }

    #[test]
    fn test_copy_binary_asset_never_overwrites() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("knob.png");
        let target = temp_dir.path().join("copy.png");
        write(&source, [0x89, b'P', b'N', b'G', 0x00, 0xff]).unwrap();

        assert_eq!(
            copy_binary_asset(&source, &target, true).unwrap(),
            CopyOutcome::Copied
        );
        assert_eq!(read(&target).unwrap(), read(&source).unwrap());

        write(&source, b"changed").unwrap();
        assert_eq!(
            copy_binary_asset(&source, &target, true).unwrap(),
            CopyOutcome::Skipped
        );
        assert_eq!(read(&target).unwrap(), vec![0x89, b'P', b'N', b'G', 0x00, 0xff]);
    }

    #[test]
    fn test_copy_binary_asset_dry_run() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("knob.psd");
        let target = temp_dir.path().join("copy.psd");
        write(&source, b"8BPS").unwrap();

        assert_eq!(
            copy_binary_asset(&source, &target, false).unwrap(),
            CopyOutcome::Planned
        );
        assert!(!target.exists());
    }

    #[test]
    fn test_write_inverted_asset_overwrites() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("skin.xml");
        let target = temp_dir.path().join("out.xml");
        write(&source, "<Color>#000000;</Color>\n").unwrap();
        write(&target, "stale content that is longer than the new one").unwrap();

        write_inverted_asset(&source, &target, true).unwrap();
        assert_eq!(read_to_string(&target).unwrap(), "<Color>#ffffff;</Color>\n");
    }

    #[test]
    fn test_write_inverted_asset_rejects_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("skin.xml");
        let target = temp_dir.path().join("out.xml");
        write(&source, [0xffu8, 0xfe, 0x00]).unwrap();

        assert!(write_inverted_asset(&source, &target, true).is_err());
        assert!(!target.exists());
    }
}
