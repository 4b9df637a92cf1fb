//! Skin discovery module
//!
//! This module contains components for listing and classifying the
//! entries of a skin folder.

mod scanner;

pub use scanner::{EntryKind, SkinEntry, is_binary_asset, scan_directory};
