//! # FrcGen Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes fundamental filesystem input/output operations
//! required by the generation engine. It provides convenient, robust wrappers
//! around standard library `std::fs` functions for tasks such as ensuring
//! directories exist, reading entire files into strings, and writing string
//! content back to files.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if absent and
//!   validates that an existing path at that location is actually a directory.
//! - **`read_file_to_string`**: Wrapper around `fs::read_to_string` that adds
//!   context to I/O errors.
//! - **`write_string_to_file`**: Writes content to a path, creating the parent
//!   directory first. Overwrites an existing file.
//!
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created, including any necessary parent
/// directories. A pre-existing directory is not an error; a pre-existing
/// non-directory is.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        debug!("Created directory: {}", path.display());
    } else if !path.is_dir() {
        anyhow::bail!(FrcgenError::FileSystem(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Reads the entire content of a file into a string, with path context on
/// failure.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}

/// Writes string content to a file path, overwriting if it exists.
///
/// The parent directory is created first if necessary.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;
    debug!("Wrote content to file: {}", path.display());
    Ok(())
}
