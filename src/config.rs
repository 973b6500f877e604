//! Configuration file support for pyprune.
//!
//! Provides YAML-based configuration through `pyprune.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::Context;
use pyprune::application::dto::OutputFormat;
use pyprune::cleanup::domain::{ProtectionPolicy, DEFAULT_PROTECTED_PACKAGES, DEFAULT_SYSTEM_DIRS};
use pyprune::shared::error::PruneError;
use pyprune::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "pyprune.config.yml";
const DEFAULT_PYTHON: &str = "python3";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub python: Option<String>,
    pub include_location: Option<bool>,
    pub system_dirs: Option<Vec<String>>,
    pub protected_packages: Option<Vec<String>>,
    pub auto_install_pipdeptree: Option<bool>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| PruneError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    validate_list("system_dirs", config.system_dirs.as_deref())?;
    validate_list("protected_packages", config.protected_packages.as_deref())?;

    if let Some(ref python) = config.python {
        if python.trim().is_empty() {
            return Err(PruneError::Validation {
                message: "python must not be empty".to_string(),
            }
            .into());
        }
    }

    if let Some(ref format) = config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|message| PruneError::Validation { message })?;
    }

    Ok(())
}

fn validate_list(field: &str, values: Option<&[String]>) -> Result<()> {
    for (i, value) in values.unwrap_or_default().iter().enumerate() {
        if value.trim().is_empty() {
            return Err(PruneError::Validation {
                message: format!("{}[{}] must not be empty", field, i),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective run settings after merging CLI, config file and defaults
#[derive(Debug, Clone)]
pub struct Settings {
    pub python: String,
    pub policy: ProtectionPolicy,
    pub auto_install: bool,
    pub format: OutputFormat,
    pub list_only: bool,
    pub dry_run: bool,
    pub colored: bool,
}

impl Settings {
    /// Merges with precedence CLI > config file > built-in default.
    /// List flags extend the configured (or default) lists.
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let empty = ConfigFile::default();
        let config = config.unwrap_or(&empty);

        let python = args
            .python
            .clone()
            .or_else(|| config.python.clone())
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

        let include_location = !args.no_location && config.include_location.unwrap_or(true);

        let mut system_dirs = config
            .system_dirs
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_DIRS.iter().map(|d| d.to_string()).collect());
        system_dirs.extend(args.system_dirs.iter().cloned());

        let mut protected = config.protected_packages.clone().unwrap_or_else(|| {
            DEFAULT_PROTECTED_PACKAGES
                .iter()
                .map(|n| n.to_string())
                .collect()
        });
        protected.extend(args.protect.iter().cloned());

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => value
                .parse::<OutputFormat>()
                .map_err(|message| PruneError::Validation { message })?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            python,
            policy: ProtectionPolicy::new(include_location, system_dirs, protected),
            auto_install: !args.no_install && config.auto_install_pipdeptree.unwrap_or(true),
            format,
            list_only: args.list || !format.is_interactive(),
            dry_run: args.dry_run,
            colored: !args.no_color,
        })
    }
}
