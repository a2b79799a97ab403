//! # FrcGen List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! This module implements the `frcgen list` command, which displays the
//! blueprints available in the resource library's catalog. Templates are
//! listed by default; `--examples` switches to the example catalog.
//!
//! ## Examples
//!
//! ```bash
//! frcgen list
//! frcgen list --examples
//! frcgen list --resources ~/wpilib/2025/utility/resources/app/resources
//! ```
//!
//! Example output:
//!
//! ```text
//! Available templates in '/home/user/wpilib/2025/utility/resources/app/resources':
//!
//! Name           | Description
//! ---------------+--------------------------------------------------
//! commandrobot   | Command-based robot skeleton
//! timedrobot     | Timed style robot
//!
//! Found 2 template(s).
//! Use 'frcgen info <Name>' for details or 'frcgen new --template <Name> <dir>' to generate one.
//! ```
//!
use crate::core::catalog::{self, BlueprintDescriptor, BlueprintKind};
use crate::core::error::Result;
use crate::core::{config, resources};
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # List Blueprint Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// List examples instead of templates.
    #[arg(long)]
    examples: bool,

    /// Resource library root. Overrides configuration and discovery.
    #[arg(long, short = 'r', env = "FRCGEN_RESOURCES")]
    resources: Option<PathBuf>,
}

/// Handler for `frcgen list`: loads one catalog and prints it as a table.
pub async fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling list command...");

    let cfg = config::load_config().context("Failed to load FrcGen configuration")?;
    let resource_root = resources::resolve_resource_root(
        args.resources.as_deref(),
        cfg.resources.directory.as_deref(),
    )?;

    let kind = if args.examples {
        BlueprintKind::Example
    } else {
        BlueprintKind::Template
    };
    let blueprints = catalog::load_catalog(&resource_root, kind).with_context(|| {
        format!(
            "Failed to load the {} catalog from '{}'",
            kind.label(),
            resource_root.display()
        )
    })?;

    print_blueprint_table(&blueprints, kind, &resource_root);
    Ok(())
}

/// Formats the catalog as a two-column table with a usage hint.
fn print_blueprint_table(blueprints: &[BlueprintDescriptor], kind: BlueprintKind, root: &Path) {
    println!(
        "Available {}s in '{}':",
        kind.label(),
        root.display()
    );

    if blueprints.is_empty() {
        println!("\nNo {}s found in this resource library.", kind.label());
        return;
    }

    let name_width = blueprints
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    println!("\n{:<name_width$} | Description", "Name");
    println!("{:-<name_width$}-+{:-<50}", "", "");
    for blueprint in blueprints {
        println!(
            "{:<name_width$} | {}",
            blueprint.name, blueprint.description
        );
    }

    println!("\nFound {} {}(s).", blueprints.len(), kind.label());
    let flag = match kind {
        BlueprintKind::Template => "--template",
        BlueprintKind::Example => "--example",
    };
    println!(
        "Use 'frcgen info <Name>' for details or 'frcgen new {flag} <Name> <dir>' to generate one."
    );
}
