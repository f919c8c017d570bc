//! Wizard configuration helpers.
//!
//! This module loads, validates, and normalizes the JSON config that tunes
//! validator limits, summary formatting, and navigation policy.
use crate::wizard::NavigationPolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current schema version for the wizard config file.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

const CONFIG_DIR_NAME: &str = "loyalty-wizard";
const CONFIG_FILE_NAME: &str = "config.json";

/// Caller-tunable limits and formatting for the wizard forms.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    pub schema_version: u32,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_code_min_length")]
    pub code_min_length: usize,
    #[serde(default = "default_code_max_length")]
    pub code_max_length: usize,
    #[serde(default = "default_allow_deferred_validation")]
    pub allow_deferred_validation: bool,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_max_name_length() -> usize {
    80
}

fn default_code_min_length() -> usize {
    4
}

fn default_code_max_length() -> usize {
    20
}

fn default_allow_deferred_validation() -> bool {
    true
}

impl WizardConfig {
    pub fn navigation_policy(&self) -> NavigationPolicy {
        NavigationPolicy {
            allow_deferred_validation: self.allow_deferred_validation,
        }
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        default_config()
    }
}

/// Build the config used when none has been written yet.
pub fn default_config() -> WizardConfig {
    WizardConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        currency_symbol: default_currency_symbol(),
        max_name_length: default_max_name_length(),
        code_min_length: default_code_min_length(),
        code_max_length: default_code_max_length(),
        allow_deferred_validation: default_allow_deferred_validation(),
    }
}

/// Render a pretty JSON config stub for `lwiz init`.
pub fn config_stub() -> String {
    serde_json::to_string_pretty(&default_config()).expect("serialize config stub")
}

/// Per-user config location, when the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<WizardConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: WizardConfig =
        serde_json::from_slice(&bytes).context("parse wizard config JSON")?;
    validate_config(&config)?;
    Ok(config)
}

/// Load `path` when given, else the per-user config if it exists, else defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<WizardConfig> {
    if let Some(path) = path {
        return load_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_config(&path),
        _ => Ok(default_config()),
    }
}

/// Persist a config to disk in a stable JSON format.
pub fn write_config(path: &Path, config: &WizardConfig) -> Result<()> {
    validate_config(config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("serialize wizard config")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Validate schema version and limit consistency.
pub fn validate_config(config: &WizardConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported wizard config schema_version {}",
            config.schema_version
        ));
    }
    if config.currency_symbol.trim().is_empty() {
        return Err(anyhow!("currency_symbol must be non-empty"));
    }
    if config.max_name_length == 0 {
        return Err(anyhow!("max_name_length must be at least 1"));
    }
    if config.code_min_length == 0 || config.code_min_length > config.code_max_length {
        return Err(anyhow!(
            "code lengths must satisfy 1 <= code_min_length <= code_max_length (got {}..{})",
            config.code_min_length,
            config.code_max_length
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
