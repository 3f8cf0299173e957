//! Configuration file support for genealogic.
//!
//! Provides YAML-based configuration through `genealogic.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::{normalize_extension, OutputFormat};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "genealogic.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub extension: Option<String>,
    pub format: Option<String>,
    pub single_class: Option<bool>,
    pub max_lines: Option<usize>,
    pub concurrency: Option<usize>,
    pub no_open: Option<bool>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, parsed
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                OutputFormat::from_str(format).map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: {}\n\n💡 Hint: Set 'format' to one of svg, png, pdf, dot, json, mermaid or text.",
                        e
                    )
                })
            })
            .transpose()
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

    // An empty file deserializes to YAML null; treat it as "no settings".
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.max_lines == Some(0) {
        bail!(
            "Invalid config: max_lines must be greater than 0.\n\n\
             💡 Hint: Use a positive line count such as 100."
        );
    }
    if config.concurrency == Some(0) {
        bail!(
            "Invalid config: concurrency must be greater than 0.\n\n\
             💡 Hint: Use a positive number of concurrent reads such as 64."
        );
    }
    if let Some(ref extension) = config.extension {
        normalize_extension(extension).context("Invalid config: extension")?;
    }
    config.output_format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
