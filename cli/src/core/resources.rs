//! # FrcGen Resource Library Location
//!
//! File: cli/src/core/resources.rs
//!
//! ## Overview
//!
//! This module locates and validates the WPILib resource library that
//! generation draws from. A resource library is the `resources` directory of
//! an installed WPILib toolsuite; installs live under year-numbered
//! directories in `~/wpilib` (e.g. `~/wpilib/2025/utility/resources/app/resources`).
//!
//! ## Architecture
//!
//! Resolution order for the library root:
//! 1. The `--resources` command-line flag.
//! 2. The `resources.directory` configuration setting (with `~` expansion).
//! 3. Discovery: the newest year-numbered install under `~/wpilib`.
//!
//! Whatever the source, a candidate root is accepted only if it exists, is a
//! directory, and contains `build/version.txt`, the same quick sanity check
//! a human would do before trusting a path.
//!
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Relative location of the version descriptor inside a resource library.
const VERSION_FILE: [&str; 2] = ["build", "version.txt"];

/// Relative location of a resource library inside one year-numbered install.
const INSTALL_SUFFIX: [&str; 4] = ["utility", "resources", "app", "resources"];

/// Checks that `path` looks like a usable resource library root.
pub fn validate_resource_root(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!(FrcgenError::MissingSourcePath {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        anyhow::bail!(FrcgenError::FileSystem(format!(
            "Resource path {} is not a directory",
            path.display()
        )));
    }
    let version_file = crate::common::fs::paths::resolve(path, VERSION_FILE);
    if !version_file.is_file() {
        anyhow::bail!(FrcgenError::MissingSourcePath { path: version_file });
    }
    Ok(())
}

/// Resolves the resource library root from flag, configuration, or discovery.
pub fn resolve_resource_root(flag: Option<&Path>, configured: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = flag {
        validate_resource_root(path)
            .with_context(|| format!("--resources path {} is not usable", path.display()))?;
        return Ok(path.to_path_buf());
    }

    if let Some(directory) = configured {
        let expanded = PathBuf::from(shellexpand::tilde(directory).into_owned());
        validate_resource_root(&expanded).with_context(|| {
            format!(
                "Configured resource directory {} is not usable",
                expanded.display()
            )
        })?;
        return Ok(expanded);
    }

    let wpilib_root = dirs::home_dir()
        .map(|home| home.join("wpilib"))
        .ok_or_else(|| {
            FrcgenError::Config("Could not determine the home directory".to_string())
        })?;
    for candidate in discover_installs(&wpilib_root) {
        if validate_resource_root(&candidate).is_ok() {
            info!("Using discovered resource library: {}", candidate.display());
            return Ok(candidate);
        }
    }
    anyhow::bail!(FrcgenError::Config(format!(
        "No WPILib installation found under {}. Pass --resources or set \
         resources.directory in the configuration.",
        wpilib_root.display()
    )));
}

/// Lists resource library candidates under a `wpilib` install root, newest
/// year first.
fn discover_installs(wpilib_root: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(wpilib_root) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut years: Vec<(u32, PathBuf)> = entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let year: u32 = entry.file_name().to_string_lossy().parse().ok()?;
            Some((
                year,
                crate::common::fs::paths::resolve(&entry.path(), INSTALL_SUFFIX),
            ))
        })
        .collect();
    years.sort_by(|a, b| b.0.cmp(&a.0));
    debug!(
        "Discovered {} candidate install(s) under {}",
        years.len(),
        wpilib_root.display()
    );
    years.into_iter().map(|(_, path)| path).collect()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_library(root: &Path) {
        fs::create_dir_all(root.join("build")).unwrap();
        fs::write(root.join("build/version.txt"), "2025.3.2\n").unwrap();
    }

    #[test]
    fn test_validate_accepts_a_real_library() -> Result<()> {
        let root = tempdir()?;
        make_library(root.path());
        validate_resource_root(root.path())
    }

    #[test]
    fn test_validate_rejects_missing_path() {
        let result = validate_resource_root(Path::new("/no/such/library"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Required source path does not exist"));
    }

    #[test]
    fn test_validate_requires_version_file() {
        let root = tempdir().unwrap();
        let result = validate_resource_root(root.path());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("version.txt"));
    }

    #[test]
    fn test_discover_installs_newest_year_first() {
        let wpilib = tempdir().unwrap();
        for year in ["2024", "2025", "notayear"] {
            fs::create_dir_all(
                wpilib
                    .path()
                    .join(year)
                    .join("utility/resources/app/resources"),
            )
            .unwrap();
        }

        let candidates = discover_installs(wpilib.path());
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].starts_with(wpilib.path().join("2025")));
        assert!(candidates[1].starts_with(wpilib.path().join("2024")));
    }

    #[test]
    fn test_discover_installs_missing_root_is_empty() {
        assert!(discover_installs(Path::new("/no/such/wpilib")).is_empty());
    }

    #[test]
    fn test_resolve_prefers_flag_over_config() -> Result<()> {
        let flagged = tempdir()?;
        make_library(flagged.path());
        let resolved = resolve_resource_root(Some(flagged.path()), Some("/ignored"))?;
        assert_eq!(resolved, flagged.path());
        Ok(())
    }

    #[test]
    fn test_resolve_uses_configured_directory() -> Result<()> {
        let configured = tempdir()?;
        make_library(configured.path());
        let resolved =
            resolve_resource_root(None, Some(configured.path().to_str().unwrap()))?;
        assert_eq!(resolved, configured.path());
        Ok(())
    }

    #[test]
    fn test_resolve_rejects_unusable_flag() {
        let empty = tempdir().unwrap();
        let result = resolve_resource_root(Some(empty.path()), None);
        assert!(result.is_err());
    }
}
