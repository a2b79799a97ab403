//! # FrcGen Path Resolution
//!
//! File: cli/src/common/fs/paths.rs
//!
//! ## Overview
//!
//! Pure path construction helpers used by the generation engine. Both the
//! source (resource library) and destination (generated project) sides of a
//! copy are built with the same `resolve` helper, so mirrored relative
//! structure is guaranteed by construction rather than checked at runtime.
//!
//! Nothing in this module touches the filesystem.
//!
use std::path::{Path, PathBuf};

/// Joins a sequence of path segments under a root.
///
/// No normalization beyond `PathBuf::push` and no existence checks are
/// performed.
pub fn resolve<I, S>(root: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut path = root.to_path_buf();
    for segment in segments {
        path.push(segment.as_ref());
    }
    path
}

/// Converts a dot-separated package path into its directory form.
///
/// `"frc.robot"` becomes `frc/robot`. Empty segments (from doubled or
/// leading/trailing dots) are dropped rather than producing empty path
/// components.
pub fn package_to_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}
