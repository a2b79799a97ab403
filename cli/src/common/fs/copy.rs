//! # FrcGen Tree Copy
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module implements the filtered tree copy at the heart of project
//! generation: walk a source directory recursively, mirror its structure into
//! a destination root, and route each regular file either through a verbatim
//! byte copy or through the text patcher, as decided by a caller-supplied
//! classification function. Whole subtrees can be pruned.
//!
//! ## Architecture
//!
//! The walk is depth-first with directories visited before their contents
//! (`walkdir` with stable name ordering), so destination directories always
//! exist before the files inside them and two runs over the same inputs
//! produce byte-identical results.
//!
//! Pruning is decided once, at directory-entry time, via `walkdir`'s
//! `filter_entry`: when the classifier returns `Skip` for a directory, none of
//! its descendants are visited at all. This lets one rule exclude e.g. every
//! `bin` directory regardless of depth.
//!
//! Symlinks and special files are not supported; encountering one aborts the
//! copy with an error naming the offending path.
//!
use crate::common::fs::{io, patch};
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// How the tree copier should treat one entry of the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// Copy the file byte-for-byte (directories: descend).
    Verbatim,
    /// Route the file through the text patcher.
    Patch,
    /// Skip the file, or prune the entire subtree for a directory.
    Skip,
}

/// Diagnostic counters reported by a tree copy.
///
/// `patched_with_changes` counts patched files whose content actually
/// differed; it never affects control flow.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyStats {
    pub files_copied: u64,
    pub files_patched: u64,
    pub patched_with_changes: u64,
}

/// Recursively copies `source` into `dest`, classifying each entry.
///
/// `classify` receives the path of each entry relative to `source` and
/// whether it is a directory. Files classified `Patch` are rewritten with
/// `substitutions` on the way; everything else classified `Verbatim` is
/// copied byte-for-byte, overwriting any existing destination file.
/// Destination directories are created idempotently.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `source` does not exist or is not a directory (`MissingSourcePath`).
/// - A symlink or special file is encountered (`UnsupportedFileType`).
/// - Any create/copy/patch operation fails.
pub fn copy_tree<F>(
    source: &Path,
    dest: &Path,
    classify: F,
    substitutions: &[patch::Substitution],
) -> Result<CopyStats>
where
    F: Fn(&Path, bool) -> CopyAction,
{
    if !source.is_dir() {
        anyhow::bail!(FrcgenError::MissingSourcePath {
            path: source.to_path_buf(),
        });
    }
    info!("Copying tree {} -> {}", source.display(), dest.display());

    let classify = &classify;
    let mut stats = CopyStats::default();
    let walker = WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // The walk root itself is never pruned.
            let relative = match entry.path().strip_prefix(source) {
                Ok(p) if !p.as_os_str().is_empty() => p,
                _ => return true,
            };
            // Prune decisions apply to directories at entry time; files are
            // classified again (Verbatim/Patch/Skip) by the copy loop below.
            if entry.file_type().is_dir() {
                classify(relative, true) != CopyAction::Skip
            } else {
                true
            }
        });

    for entry in walker {
        let entry = entry.with_context(|| {
            format!("Failed to read a directory entry under {}", source.display())
        })?;
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            anyhow::bail!(FrcgenError::UnsupportedFileType {
                path: entry.path().to_path_buf(),
            });
        }

        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("Entry escaped the walk root {}", source.display()))?;
        let target = dest.join(relative);

        if file_type.is_dir() {
            io::ensure_dir_exists(&target)?;
        } else if file_type.is_file() {
            match classify(relative, false) {
                CopyAction::Skip => continue,
                CopyAction::Verbatim => {
                    if let Some(parent) = target.parent() {
                        io::ensure_dir_exists(parent)?;
                    }
                    fs::copy(entry.path(), &target).with_context(|| {
                        format!(
                            "Failed to copy {} to {}",
                            entry.path().display(),
                            target.display()
                        )
                    })?;
                    stats.files_copied += 1;
                }
                CopyAction::Patch => {
                    if let Some(parent) = target.parent() {
                        io::ensure_dir_exists(parent)?;
                    }
                    let changed = patch::patch_file(entry.path(), &target, substitutions)
                        .with_context(|| {
                            format!(
                                "Failed to patch {} into {}",
                                entry.path().display(),
                                target.display()
                            )
                        })?;
                    stats.files_patched += 1;
                    if changed {
                        stats.patched_with_changes += 1;
                    }
                }
            }
        } else {
            anyhow::bail!(FrcgenError::UnsupportedFileType {
                path: entry.path().to_path_buf(),
            });
        }
    }

    debug!(
        "Copied tree {}: {} file(s) verbatim, {} patched ({} with changes)",
        source.display(),
        stats.files_copied,
        stats.files_patched,
        stats.patched_with_changes
    );
    Ok(stats)
}
