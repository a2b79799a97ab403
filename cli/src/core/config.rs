//! # FrcGen Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for FrcGen, handling
//! loading, merging, and access to configuration data. Configuration is
//! optional (every setting has a flag or a sensible default), but a user who
//! generates projects regularly can persist their resource library location,
//! team number, and package path once instead of repeating them.
//!
//! ## Architecture
//!
//! Configuration sources, in order of precedence:
//! 1. A project-specific `.frcgen.toml` in the current directory or its
//!    ancestors (the search stops at a `.git` boundary).
//! 2. The user-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/frcgen/config.toml`).
//! 3. Default values defined in the code.
//!
//! Paths are `~`-expanded after merging. Unknown TOML keys are rejected so a
//! typo fails loudly instead of being silently ignored.
//!
use crate::core::error::{FrcgenError, Result};
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".frcgen.toml";

/// The main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub defaults: GenerationDefaults,
}

/// Where to find the WPILib resource library.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Resource library directory (can use ~). Expanded during load. When
    /// unset, year-numbered installs under `~/wpilib` are discovered instead.
    #[serde(default)]
    pub directory: Option<String>,
}

/// Default generation parameters applied when the matching flag is absent.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct GenerationDefaults {
    /// Team number written into generated projects.
    #[serde(default)]
    pub team_number: Option<u32>,
    /// Package path for generated sources.
    #[serde(default = "default_package")]
    pub package: String,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            team_number: None,
            package: default_package(),
        }
    }
}

fn default_package() -> String {
    crate::core::generator::DEFAULT_PACKAGE.to_string()
}

/// Loads, merges, expands, and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged);
    validate_config(&merged).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged);
    Ok(merged)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "FrcGen", "frcgen") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.frcgen.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        // A repository boundary ends the search.
        if path.join(".git").is_dir() {
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Merges the project configuration over the user configuration, field by
/// field: a setting present in the project file wins.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        resources: ResourcesConfig {
            directory: project.resources.directory.or(user.resources.directory),
        },
        defaults: GenerationDefaults {
            team_number: project.defaults.team_number.or(user.defaults.team_number),
            package: if project.defaults.package != default_package() {
                project.defaults.package
            } else {
                user.defaults.package
            },
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(directory) = &config.resources.directory {
        config.resources.directory = Some(shellexpand::tilde(directory).into_owned());
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if let Some(directory) = &config.resources.directory {
        let path = PathBuf::from(directory);
        if !path.exists() {
            warn!(
                "Configured resource directory '{}' does not exist.",
                path.display()
            );
        } else if !path.is_dir() {
            anyhow::bail!(FrcgenError::Config(format!(
                "Configured resource path '{}' exists but is not a directory.",
                path.display()
            )));
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [resources]
            directory = "~/wpilib/2025/utility/resources/app/resources"

            [defaults]
            team_number = 1778
            package = "org.team1778.robot"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(
            config.resources.directory.as_deref(),
            Some("~/wpilib/2025/utility/resources/app/resources")
        );
        assert_eq!(config.defaults.team_number, Some(1778));
        assert_eq!(config.defaults.package, "org.team1778.robot");
    }

    #[test]
    fn test_defaults_apply_when_sections_absent() {
        let config: Config = toml::from_str("").expect("Empty TOML should parse");
        assert!(config.resources.directory.is_none());
        assert!(config.defaults.team_number.is_none());
        assert_eq!(config.defaults.package, "frc.robot");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[resourcez]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_project_config_wins_merge() {
        let user = Config {
            resources: ResourcesConfig {
                directory: Some("/user/resources".into()),
            },
            defaults: GenerationDefaults {
                team_number: Some(1),
                package: "org.user.robot".into(),
            },
        };
        let project = Config {
            resources: ResourcesConfig {
                directory: Some("/project/resources".into()),
            },
            defaults: GenerationDefaults {
                team_number: Some(1778),
                package: default_package(),
            },
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(
            merged.resources.directory.as_deref(),
            Some("/project/resources")
        );
        assert_eq!(merged.defaults.team_number, Some(1778));
        // The project file left the package at its default, so the user's
        // setting survives.
        assert_eq!(merged.defaults.package, "org.user.robot");
    }

    #[test]
    fn test_merge_without_project_config_is_user_config() {
        let user = Config {
            resources: ResourcesConfig {
                directory: Some("/user/resources".into()),
            },
            defaults: GenerationDefaults::default(),
        };
        let merged = merge_configs(user, None);
        assert_eq!(merged.resources.directory.as_deref(), Some("/user/resources"));
    }

    #[test]
    fn test_expand_config_paths_handles_tilde() {
        let mut config = Config {
            resources: ResourcesConfig {
                directory: Some("~/wpilib".into()),
            },
            defaults: GenerationDefaults::default(),
        };
        expand_config_paths(&mut config);
        let expanded = config.resources.directory.unwrap();
        assert!(!expanded.starts_with('~'));
    }
}
