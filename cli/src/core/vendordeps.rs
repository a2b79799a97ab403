//! # FrcGen Vendor Dependency Resolution
//!
//! File: cli/src/core/vendordeps.rs
//!
//! ## Overview
//!
//! Maps the short vendor dependency keys a blueprint may declare (e.g.
//! `romi`, `xrp`) to the manifest files shipped in the resource library's
//! `vendordeps/` directory, and copies the selected manifests into the
//! generated project.
//!
//! Every generated project receives the baseline `WPILibNewCommands.json`
//! manifest; extras follow in the order the blueprint declares them. The key
//! table is closed: an unknown key is a configuration error in the resource
//! library and aborts the run.
//!
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use std::path::Path;
use tracing::debug;

/// Manifest included in every generated project.
const BASELINE_MANIFEST: &str = "WPILibNewCommands.json";

/// Closed mapping from vendor dependency key to manifest file name.
const MANIFESTS_BY_KEY: &[(&str, &str)] = &[
    ("romi", "RomiVendordep.json"),
    ("xrp", "XRPVendordep.json"),
];

/// Resolves vendor dependency keys to the ordered list of manifest file
/// names to copy: the baseline first, then one per key in caller order.
pub fn resolve_vendordep_files(keys: &[String]) -> Result<Vec<&'static str>> {
    let mut files = vec![BASELINE_MANIFEST];
    for key in keys {
        let file = MANIFESTS_BY_KEY
            .iter()
            .find(|(known, _)| known == key)
            .map(|(_, file)| *file)
            .ok_or_else(|| FrcgenError::UnknownVendorKey { key: key.clone() })?;
        files.push(file);
    }
    Ok(files)
}

/// Copies the resolved manifests from the library into the project.
///
/// The destination directory is created if absent and existing files are
/// overwritten. A missing source manifest aborts immediately; a partial
/// vendor set is never silently accepted.
pub fn copy_vendordep_files(source_dir: &Path, dest_dir: &Path, files: &[&str]) -> Result<()> {
    crate::common::fs::io::ensure_dir_exists(dest_dir)?;
    for file in files {
        let source = source_dir.join(file);
        if !source.is_file() {
            anyhow::bail!(FrcgenError::MissingSourcePath { path: source });
        }
        let dest = dest_dir.join(file);
        std::fs::copy(&source, &dest).with_context(|| {
            format!(
                "Failed to copy vendor manifest {} to {}",
                source.display(),
                dest.display()
            )
        })?;
        debug!("Copied vendor manifest {}", file);
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_baseline_only() {
        let files = resolve_vendordep_files(&[]).unwrap();
        assert_eq!(files, vec!["WPILibNewCommands.json"]);
    }

    #[test]
    fn test_resolve_keeps_caller_order_after_baseline() {
        let files =
            resolve_vendordep_files(&["romi".to_string()]).unwrap();
        assert_eq!(files, vec!["WPILibNewCommands.json", "RomiVendordep.json"]);

        let files = resolve_vendordep_files(&["xrp".to_string(), "romi".to_string()]).unwrap();
        assert_eq!(
            files,
            vec![
                "WPILibNewCommands.json",
                "XRPVendordep.json",
                "RomiVendordep.json"
            ]
        );
    }

    #[test]
    fn test_resolve_unknown_key_is_fatal() {
        let result = resolve_vendordep_files(&["bogus".to_string()]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown vendor dependency 'bogus'"));
    }

    #[test]
    fn test_copy_creates_destination_and_overwrites() -> Result<()> {
        let source = tempdir()?;
        let dest_root = tempdir()?;
        let dest = dest_root.path().join("vendordeps");
        fs::write(source.path().join("WPILibNewCommands.json"), "{\"v\":1}")?;
        fs::create_dir_all(&dest)?;
        fs::write(dest.join("WPILibNewCommands.json"), "stale")?;

        copy_vendordep_files(source.path(), &dest, &["WPILibNewCommands.json"])?;
        assert_eq!(
            fs::read_to_string(dest.join("WPILibNewCommands.json"))?,
            "{\"v\":1}"
        );
        Ok(())
    }

    #[test]
    fn test_copy_missing_manifest_aborts() {
        let source = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let result = copy_vendordep_files(
            source.path(),
            dest.path(),
            &["WPILibNewCommands.json"],
        );
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Required source path does not exist"));
    }
}
