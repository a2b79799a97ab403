//! # FrcGen Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the FrcGen application.
//! It provides a consistent approach to error management with detailed error
//! information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FrcgenError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the failure modes of a generation run:
//! - Configuration errors
//! - Missing resource-library paths
//! - Unsupported filesystem entries (symlinks, special files)
//! - Unknown vendor dependency keys
//! - Malformed version descriptors
//! - Unusable blueprint catalog entries
//!
//! Permission failures (create/write/chmod rejected by the filesystem) are
//! surfaced as the underlying `std::io::Error`, wrapped with operation context
//! by `anyhow` at the call site so the message names the paths involved.
//!
use thiserror::Error;

/// Custom error type for the FrcGen application.
#[derive(Error, Debug)]
pub enum FrcgenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Required source path does not exist: {path}")]
    MissingSourcePath { path: std::path::PathBuf },

    #[error("Unsupported file type (symlink or special file): {path}")]
    UnsupportedFileType { path: std::path::PathBuf },

    #[error("Unknown vendor dependency '{key}'. Known keys: romi, xrp.")]
    UnknownVendorKey { key: String },

    #[error("Malformed version descriptor '{path}': {reason}")]
    MalformedVersionFile {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error("Blueprint '{name}' not found in the resource library catalog.")]
    BlueprintNotFound { name: String },

    #[error("Catalog entry '{name}' is not usable by this generator: {reason}")]
    UnsupportedCatalogEntry { name: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
