//! # FrcGen New Command
//!
//! File: cli/src/commands/new.rs
//!
//! ## Overview
//!
//! This module implements the `frcgen new` command, which generates a new
//! robot project from a blueprint in the WPILib resource library. It handles:
//! - Parsing command-line arguments for project creation
//! - Resolving the resource library (flag, configuration, or discovery)
//! - Selecting and validating the requested blueprint from the catalog
//! - Preparing the destination directory
//! - Invoking the generation engine
//! - Printing next steps after the project is created
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration for defaults (resource directory, team, package)
//! 2. Resolve and validate the resource library root
//! 3. Load the matching catalog and select the blueprint (prefix match)
//! 4. Validate the destination (created if absent, must be empty)
//! 5. Build a `GenerationRequest` and run the generator
//! 6. Print a completion message with relevant next steps
//!
//! ## Examples
//!
//! ```bash
//! # Generate the timedrobot template with a team number
//! frcgen new --template timedrobot --team 1778 ~/robot/my-robot
//!
//! # Generate an example into a custom package
//! frcgen new --example romireference --package org.team1778.robot ./romi-demo
//!
//! # Point at an explicit resource library
//! frcgen new --template simple --resources ~/wpilib/2025/utility/resources/app/resources ./proj
//! ```
//!
use crate::core::catalog::{self, BlueprintKind};
use crate::core::error::{FrcgenError, Result};
use crate::core::generator::{self, GenerationRequest};
use crate::core::{config, resources};
use anyhow::Context;
use clap::{ArgGroup, Parser};
use regex::Regex;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Package paths accepted for generated sources.
const PACKAGE_PATTERN: &str = r"^[A-Za-z0-9_.]+$";

/// # New Project Arguments (`NewArgs`)
///
/// Defines the command-line arguments accepted by the `frcgen new`
/// subcommand. Exactly one of `--template` or `--example` selects the
/// blueprint.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("blueprint").required(true).args(["template", "example"])))]
pub struct NewArgs {
    /// Template to generate (name or unambiguous prefix).
    #[arg(long, short = 't')]
    template: Option<String>,

    /// Example to generate (name or unambiguous prefix).
    #[arg(long, short = 'e')]
    example: Option<String>,

    /// Directory to create the project in. Created if absent; must be empty.
    dest: PathBuf,

    /// Resource library root. Overrides configuration and discovery.
    #[arg(long, short = 'r', env = "FRCGEN_RESOURCES")]
    resources: Option<PathBuf>,

    /// FRC team number written into the project preferences.
    #[arg(long)]
    team: Option<u32>,

    /// Package path for the generated sources (e.g. org.team1778.robot).
    #[arg(long)]
    package: Option<String>,
}

/// Handler for `frcgen new`: selects the blueprint, prepares the
/// destination, and drives the generation engine.
pub async fn handle_new(args: NewArgs) -> Result<()> {
    info!("Handling new command...");

    let cfg = config::load_config().context("Failed to load FrcGen configuration")?;
    let resource_root =
        resources::resolve_resource_root(args.resources.as_deref(), cfg.resources.directory.as_deref())?;
    debug!("Using resource library: {}", resource_root.display());

    // Exactly one of the two is present, enforced by the clap group.
    let (kind, requested_name) = match (&args.template, &args.example) {
        (Some(name), None) => (BlueprintKind::Template, name.as_str()),
        (None, Some(name)) => (BlueprintKind::Example, name.as_str()),
        _ => unreachable!("clap group guarantees exactly one blueprint flag"),
    };

    let catalog = catalog::load_catalog(&resource_root, kind)?;
    let blueprint = catalog::find_blueprint(&catalog, requested_name)?.clone();
    if blueprint.name != requested_name {
        println!("using {} '{}'", kind.label(), blueprint.name);
    }
    catalog::ensure_supported(&blueprint)?;

    prepare_destination(&args.dest)?;

    let team_number = match args.team.or(cfg.defaults.team_number) {
        Some(team) => team as i32,
        None => {
            warn!("No team number given; the generated preferences keep the -1 placeholder.");
            generator::TEAM_NUMBER_UNSET
        }
    };

    let package = args.package.unwrap_or(cfg.defaults.package);
    validate_package(&package)?;

    let request = GenerationRequest {
        resources: resource_root,
        destination: args.dest.clone(),
        blueprint,
        team_number,
        package,
    };
    generator::generate(&request).context("Project generation failed")?;

    print_completion_message(&args.dest, team_number);
    Ok(())
}

/// Ensures the destination is an empty directory, creating it if absent.
fn prepare_destination(dest: &Path) -> Result<()> {
    if !dest.exists() {
        fs::create_dir_all(dest).with_context(|| {
            format!("Failed to create destination directory {}", dest.display())
        })?;
        return Ok(());
    }
    if !dest.is_dir() {
        anyhow::bail!(FrcgenError::FileSystem(format!(
            "Destination {} exists but is not a directory",
            dest.display()
        )));
    }
    let occupied = fs::read_dir(dest)
        .with_context(|| format!("Failed to read destination directory {}", dest.display()))?
        .next()
        .is_some();
    if occupied {
        anyhow::bail!(FrcgenError::FileSystem(format!(
            "Destination {} already contains files",
            dest.display()
        )));
    }
    Ok(())
}

/// Validates a dot-separated package path.
fn validate_package(package: &str) -> Result<()> {
    let pattern = Regex::new(PACKAGE_PATTERN).expect("package pattern is a valid regex");
    if !pattern.is_match(package) {
        anyhow::bail!(FrcgenError::Config(format!(
            "Invalid package path '{package}'. Only letters, digits, '_' and '.' are allowed."
        )));
    }
    Ok(())
}

/// Displays a success message and the usual first Gradle commands.
fn print_completion_message(dest: &Path, team_number: i32) {
    println!("\n✅ Project created successfully!");
    println!("   Location: {}", dest.display());

    println!("\nNext steps:");
    let display_path = match env::current_dir() {
        Ok(cwd) => pathdiff::diff_paths(dest, &cwd)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| dest.display().to_string()),
        Err(_) => dest.display().to_string(),
    };
    println!("  1. Navigate to your project: cd {display_path}");
    println!("  2. Build the robot code: ./gradlew build");
    if team_number == generator::TEAM_NUMBER_UNSET {
        println!("  3. Set your team number in .wpilib/wpilib_preferences.json before deploying");
    } else {
        println!("  3. Deploy to the robot: ./gradlew deploy");
    }
}
