//! # FrcGen Command Handlers
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the handlers behind the `frcgen` subcommands. Each
//! submodule owns one subcommand: its clap arguments struct and its
//! asynchronous handler function. `main.rs` routes the parsed command to the
//! matching handler.
//!

/// `frcgen info`: show one blueprint's catalog entry in detail.
pub mod info;
/// `frcgen list`: list the blueprints available in the resource library.
pub mod list;
/// `frcgen new`: generate a robot project from a blueprint.
pub mod new;
