//! # FrcGen Blueprint Catalog
//!
//! File: cli/src/core/catalog.rs
//!
//! ## Overview
//!
//! This module loads the blueprint catalogs shipped inside a WPILib resource
//! library (`templates.json` / `examples.json`) and turns their entries into
//! validated `BlueprintDescriptor` values. The generation engine never sees
//! raw catalog JSON; everything downstream of this module works with the
//! typed descriptor.
//!
//! ## Architecture
//!
//! - `CatalogEntry` is the serde schema of one catalog record, with the
//!   defaults the library format allows (`hasunittests`, `commandversion`,
//!   `extravendordeps` may be absent).
//! - `BlueprintKind` is the closed Template/Example variant; it carries the
//!   resource subdirectory names for code, tests, and the catalog file as
//!   data.
//! - `load_catalog` reads and parses one catalog, sorted by folder name.
//! - `find_blueprint` selects a descriptor by exact name, falling back to the
//!   first prefix match in sorted order (so `time` may resolve `timedrobot`).
//! - `ensure_supported` checks the invariants the generator relies on
//!   (`mainclass == "Main"`, `commandversion == 2`) on the *selected* entry;
//!   listing commands stay usable even if a future library adds shapes this
//!   generator does not understand.
//!
use crate::common::fs::paths;
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One record of `templates.json` / `examples.json`, as shipped in the
/// resource library.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    foldername: String,
    gradlebase: String,
    #[serde(default)]
    hasunittests: bool,
    mainclass: String,
    #[serde(default = "default_command_version")]
    commandversion: u32,
    #[serde(default)]
    extravendordeps: Vec<String>,
}

fn default_command_version() -> u32 {
    2
}

/// Whether a blueprint is a bare template or a complete example project.
///
/// The variant carries the resource-library subdirectory names it implies,
/// as data rather than behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlueprintKind {
    Template,
    Example,
}

impl BlueprintKind {
    /// Subdirectory of `<root>/java/src/` holding the code trees.
    pub fn code_dir(self) -> &'static str {
        match self {
            BlueprintKind::Template => "templates",
            BlueprintKind::Example => "examples",
        }
    }

    /// Subdirectory of `<root>/java/src/` holding the unit-test trees.
    pub fn test_dir(self) -> &'static str {
        match self {
            BlueprintKind::Template => "templates_test",
            BlueprintKind::Example => "examples_test",
        }
    }

    /// Catalog file name inside the code subdirectory.
    pub fn catalog_file(self) -> &'static str {
        match self {
            BlueprintKind::Template => "templates.json",
            BlueprintKind::Example => "examples.json",
        }
    }

    /// Lowercase label for messages ("template" / "example").
    pub fn label(self) -> &'static str {
        match self {
            BlueprintKind::Template => "template",
            BlueprintKind::Example => "example",
        }
    }
}

/// One buildable blueprint, validated out of the catalog.
#[derive(Debug, Clone)]
pub struct BlueprintDescriptor {
    /// Folder name: the unique key, also the source subdirectory name.
    pub name: String,
    /// Human-readable title from the catalog.
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub kind: BlueprintKind,
    /// Which build-scaffold variant this blueprint uses (e.g., "java").
    pub build_base: String,
    pub has_unit_tests: bool,
    /// Extra vendor dependency keys, in catalog order.
    pub extra_vendordeps: Vec<String>,
    pub main_class: String,
    pub command_version: u32,
}

/// Loads one blueprint catalog from the resource library, sorted by folder
/// name.
pub fn load_catalog(resources: &Path, kind: BlueprintKind) -> Result<Vec<BlueprintDescriptor>> {
    let catalog_path = paths::resolve(
        resources,
        ["java", "src", kind.code_dir(), kind.catalog_file()],
    );
    if !catalog_path.is_file() {
        anyhow::bail!(FrcgenError::MissingSourcePath { path: catalog_path });
    }

    let text = std::fs::read_to_string(&catalog_path)
        .with_context(|| format!("Failed to read catalog {}", catalog_path.display()))?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse catalog {}", catalog_path.display()))?;
    debug!(
        "Loaded {} entr(ies) from {}",
        entries.len(),
        catalog_path.display()
    );

    let mut descriptors: Vec<BlueprintDescriptor> = entries
        .into_iter()
        .map(|entry| BlueprintDescriptor {
            name: entry.foldername,
            title: entry.name,
            description: entry.description,
            tags: entry.tags,
            kind,
            build_base: entry.gradlebase,
            has_unit_tests: entry.hasunittests,
            extra_vendordeps: entry.extravendordeps,
            main_class: entry.mainclass,
            command_version: entry.commandversion,
        })
        .collect();
    descriptors.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(descriptors)
}

/// Selects a blueprint by name: exact match first, then the first prefix
/// match in sorted order.
pub fn find_blueprint<'a>(
    catalog: &'a [BlueprintDescriptor],
    name: &str,
) -> Result<&'a BlueprintDescriptor> {
    if let Some(descriptor) = catalog.iter().find(|d| d.name == name) {
        return Ok(descriptor);
    }
    catalog
        .iter()
        .find(|d| d.name.starts_with(name))
        .ok_or_else(|| {
            FrcgenError::BlueprintNotFound {
                name: name.to_string(),
            }
            .into()
        })
}

/// Checks the catalog invariants the generator relies on.
///
/// Every blueprint in current WPILib libraries has `mainclass == "Main"` and
/// `commandversion == 2`; other shapes exist in tooling this generator does
/// not reimplement, so they are rejected up front.
pub fn ensure_supported(descriptor: &BlueprintDescriptor) -> Result<()> {
    if descriptor.main_class != "Main" {
        anyhow::bail!(FrcgenError::UnsupportedCatalogEntry {
            name: descriptor.name.clone(),
            reason: format!(
                "main class '{}' is not supported (expected 'Main')",
                descriptor.main_class
            ),
        });
    }
    if descriptor.command_version != 2 {
        anyhow::bail!(FrcgenError::UnsupportedCatalogEntry {
            name: descriptor.name.clone(),
            reason: format!(
                "command framework version {} is not supported (expected 2)",
                descriptor.command_version
            ),
        });
    }
    Ok(())
}
