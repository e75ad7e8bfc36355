//! Configuration file support for jdep-analyzer.
//!
//! Provides YAML-based configuration through `jdep.config.yml` files,
//! including data structures, file loading, validation and store path
//! precedence.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::dependency_graph::domain::Direction;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "jdep.config.yml";

/// Environment variable overriding the configured store path
pub const STORE_PATH_ENV: &str = "JDEP_STORE_PATH";

pub const DEFAULT_STORE_PATH: &str = "dependencies.json";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub store_path: Option<PathBuf>,
    pub format: Option<String>,
    pub ignore_group: Option<bool>,
    pub ignore_version: Option<bool>,
    pub direction: Option<String>,
    pub depth: Option<u32>,
    pub limit: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Configured output format; validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// Configured traversal direction; validated on load
    pub fn traversal_direction(&self) -> Option<Direction> {
        self.direction.as_deref().and_then(|d| d.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "loaded config file");

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

/// Store path precedence: CLI flag, then `JDEP_STORE_PATH`, then the config
/// file, then `dependencies.json`.
pub fn resolve_store_path(
    cli: Option<PathBuf>,
    env: Option<String>,
    config: Option<&ConfigFile>,
) -> PathBuf {
    cli.or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .or_else(|| config.and_then(|c| c.store_path.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Use one of 'json', 'markdown' or 'csv'.",
                e
            );
        }
    }
    if let Some(ref direction) = config.direction {
        if let Err(e) = direction.parse::<Direction>() {
            bail!("Invalid config: {}", e);
        }
    }
    if config.depth == Some(0) {
        bail!(
            "Invalid config: depth must be at least 1.\n\n\
             💡 Hint: Omit 'depth' to traverse the full reachable graph."
        );
    }
    if config.limit == Some(0) {
        bail!(
            "Invalid config: limit must be at least 1.\n\n\
             💡 Hint: Omit 'limit' to list every matching row."
        );
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
