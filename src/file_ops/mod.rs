//! File operations module
//!
//! This module contains the operations that populate the destination skin.

mod actions;

pub use actions::{CopyOutcome, copy_binary_asset, create_directory, write_inverted_asset};
