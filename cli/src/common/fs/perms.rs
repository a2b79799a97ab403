//! # FrcGen File Permissions
//!
//! File: cli/src/common/fs/perms.rs
//!
//! ## Overview
//!
//! Marks the generated build-tooling wrapper script (`gradlew`) executable.
//! Execute bits are added to the file's existing permission set; no existing
//! bit is cleared. On targets without Unix permission semantics this is a
//! no-op, which is acceptable for the wrapper script (the `.bat` launcher is
//! used there instead).
//!
use crate::core::error::Result;
#[cfg(unix)]
use anyhow::Context;
use std::path::Path;

/// Adds owner/group/other execute bits to `path`.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read permissions of {}", path.display()))?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    std::fs::set_permissions(path, permissions)
        .with_context(|| format!("Failed to mark {} executable", path.display()))?;
    tracing::debug!("Marked {} executable", path.display());
    Ok(())
}

/// No execute-bit concept on this platform.
#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_adds_execute_bits_without_clearing_others() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let script = dir.path().join("gradlew");
        std::fs::write(&script, "#!/bin/sh\n")?;
        let mut permissions = std::fs::metadata(&script)?.permissions();
        permissions.set_mode(0o640);
        std::fs::set_permissions(&script, permissions)?;

        make_executable(&script)?;

        let mode = std::fs::metadata(&script)?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o751);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(make_executable(&dir.path().join("absent")).is_err());
    }
}
