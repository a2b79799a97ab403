//! # FrcGen Text Patching
//!
//! File: cli/src/common/fs/patch.rs
//!
//! ## Overview
//!
//! This module implements the text patcher used while materializing a project:
//! deterministic substitutions applied to a text file on its way from the
//! resource library to the destination tree (package renaming, placeholder
//! substitution, team-number replacement).
//!
//! ## Architecture
//!
//! A `Substitution` pairs a compiled regular expression with a replacement
//! string. `patch_file` reads the source as text, applies every substitution
//! in order to every physical line, and writes the result with a single
//! canonical line terminator (`\n`) regardless of the source's terminator
//! style.
//!
//! The destination is written through a temporary file in the destination's
//! directory and atomically renamed into place, so a failure mid-write never
//! leaves a partially-written destination file visible. Patching a file in
//! place (source == destination) is supported for the same reason: the source
//! is fully read before the temporary file is created.
//!
use crate::core::error::Result;
use anyhow::Context;
use regex::Regex;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// One ordered (matcher, replacement) pair applied to text content.
///
/// The replacement string uses the `regex` crate's expansion syntax, so
/// capture groups written as `${1}` are available to regex-based
/// substitutions. Literal substitutions escape both sides.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    /// Builds a substitution from a regular expression pattern.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid substitution pattern '{pattern}'"))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Builds a substitution that replaces a literal token wholesale.
    ///
    /// Both sides are escaped: the token is matched verbatim and `$` in the
    /// replacement carries no expansion meaning.
    pub fn literal(token: &str, replacement: &str) -> Self {
        Self {
            // Escaping makes the pattern infallible to compile.
            pattern: Regex::new(&regex::escape(token)).expect("escaped literal is a valid regex"),
            replacement: replacement.replace('$', "$$"),
        }
    }

    /// Applies this substitution to one line, replacing every match.
    fn apply(&self, line: &str) -> String {
        self.pattern
            .replace_all(line, self.replacement.as_str())
            .into_owned()
    }
}

/// Applies substitutions to a text file, writing the result to `dest`.
///
/// Every substitution is applied, in order, to every physical line of the
/// source. Output lines are joined with `\n`; a source using `\r\n` is
/// normalized in the process. The returned flag reports whether any
/// substitution actually altered content; it is purely diagnostic and has no
/// effect on control flow. Line-terminator normalization alone does not count
/// as a change.
///
/// # Errors
///
/// Returns an `Err` if the source cannot be read as text, or if the
/// temporary-file write or the final rename fails. On failure no partial
/// `dest` is left visible.
pub fn patch_file(source: &Path, dest: &Path, substitutions: &[Substitution]) -> Result<bool> {
    let text = std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read source file {}", source.display()))?;

    let mut changed = false;
    let mut output = String::with_capacity(text.len());
    for line in text.lines() {
        let mut patched = line.to_string();
        for substitution in substitutions {
            patched = substitution.apply(&patched);
        }
        if patched != line {
            changed = true;
        }
        output.push_str(&patched);
        output.push('\n');
    }

    write_atomically(dest, &output)?;
    debug!(
        "Patched {} -> {} (changed: {})",
        source.display(),
        dest.display(),
        changed
    );
    Ok(changed)
}

/// Writes content to `dest` via a sibling temporary file and a rename.
fn write_atomically(dest: &Path, content: &str) -> Result<()> {
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temporary file in {} for {}",
            parent.display(),
            dest.display()
        )
    })?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write patched content for {}", dest.display()))?;
    temp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move patched file into place at {}", dest.display()))?;
    Ok(())
}
