//! # FrcGen Info Command
//!
//! File: cli/src/commands/info.rs
//!
//! ## Overview
//!
//! This module implements the `frcgen info` command, which shows one
//! blueprint's catalog entry in detail: title, description, tags, build
//! scaffold variant, unit tests, and extra vendor dependencies. The name is
//! matched the same way `frcgen new` matches it (exact, then prefix), so the
//! two commands always agree on what a name resolves to.
//!
//! ## Examples
//!
//! ```bash
//! frcgen info timedrobot
//! frcgen info --example romireference
//! ```
//!
use crate::core::catalog::{self, BlueprintKind};
use crate::core::error::Result;
use crate::core::{config, resources};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # Info Blueprint Arguments (`InfoArgs`)
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Blueprint name (or unambiguous prefix) to describe.
    name: String,

    /// Look the name up in the example catalog instead of the templates.
    #[arg(long)]
    example: bool,

    /// Resource library root. Overrides configuration and discovery.
    #[arg(long, short = 'r', env = "FRCGEN_RESOURCES")]
    resources: Option<PathBuf>,
}

/// Handler for `frcgen info`: resolves one blueprint and prints its entry.
pub async fn handle_info(args: InfoArgs) -> Result<()> {
    info!("Handling info command...");

    let cfg = config::load_config().context("Failed to load FrcGen configuration")?;
    let resource_root = resources::resolve_resource_root(
        args.resources.as_deref(),
        cfg.resources.directory.as_deref(),
    )?;

    let kind = if args.example {
        BlueprintKind::Example
    } else {
        BlueprintKind::Template
    };
    let blueprints = catalog::load_catalog(&resource_root, kind)?;
    let blueprint = catalog::find_blueprint(&blueprints, &args.name)?;

    println!("{} ({})", blueprint.title, kind.label());
    println!("  Folder:        {}", blueprint.name);
    println!("  Description:   {}", blueprint.description);
    if !blueprint.tags.is_empty() {
        println!("  Tags:          {}", blueprint.tags.join(", "));
    }
    println!("  Build scaffold: {}", blueprint.build_base);
    println!(
        "  Unit tests:    {}",
        if blueprint.has_unit_tests { "yes" } else { "no" }
    );
    if !blueprint.extra_vendordeps.is_empty() {
        println!(
            "  Vendor deps:   {}",
            blueprint.extra_vendordeps.join(", ")
        );
    }

    let flag = match kind {
        BlueprintKind::Template => "--template",
        BlueprintKind::Example => "--example",
    };
    println!(
        "\nGenerate it with: frcgen new {flag} {} <dir>",
        blueprint.name
    );
    Ok(())
}
