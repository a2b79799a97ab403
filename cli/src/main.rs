//! # FrcGen Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the FrcGen CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each subcommand (`new`, `list`, `info`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic FrcGen usage:
//!
//! ```bash
//! # Get help
//! frcgen --help
//!
//! # Generate a project with increased verbosity
//! frcgen -vv new --template timedrobot --team 1778 my-robot
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handlers for the individual subcommands (new, list, info).
mod common; // Shared utilities (filesystem machinery).
mod core; // Core infrastructure (errors, config, catalog, generator).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "frcgen",
    about = "🤖 FrcGen ⚙️: FRC Robot Project Generator",
    long_about = "Generate ready-to-build FRC robot projects from the templates and examples\n\
                  shipped with an installed WPILib toolsuite.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available subcommands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "n")]
    New(commands::new::NewArgs),
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    #[command(alias = "i")]
    Info(commands::info::InfoArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::New(args) => commands::new::handle_new(args).await,
        Commands::List(args) => commands::list::handle_list(args).await,
        Commands::Info(args) => commands::info::handle_info(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn frcgen_cmd() -> Command {
        Command::cargo_bin("frcgen").expect("Failed to find frcgen binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        frcgen_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        frcgen_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
