//! Configuration file support for sbom-licenses.
//!
//! Provides YAML-based configuration through `sbom-licenses.config.yml` files,
//! including data structures, file loading, validation, and the resolved
//! [`Configuration`] the rest of the crate is built from.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT};
use crate::shared::error::LicenseError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-licenses.config.yml";

/// Output directory used when neither CLI nor config file name one
pub const DEFAULT_OUTPUT_DIR: &str = "licenses";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub license_cache_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
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

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a timeout in seconds, e.g. `timeout_secs: 30`."
        );
    }
    if config.max_retries == Some(0) {
        bail!(
            "Invalid config: max_retries must be at least 1.\n\n\
             💡 Hint: max_retries counts attempts, so 1 means no retry."
        );
    }
    for (key, path) in [
        ("license_cache_path", &config.license_cache_path),
        ("output_dir", &config.output_dir),
    ] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the key or set it to a directory path.",
                key
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Resolved settings for one run
///
/// Built from an optional config file, then overridden field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    license_cache_path: Option<PathBuf>,
    output_dir: PathBuf,
    timeout: Duration,
    max_retries: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            license_cache_path: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Configuration {
    pub fn from_config_file(file: &ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            license_cache_path: file.license_cache_path.clone(),
            output_dir: file.output_dir.clone().unwrap_or(defaults.output_dir),
            timeout: file
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: file.max_retries.unwrap_or(defaults.max_retries),
        }
    }

    /// Directory of the persistent license cache; `None` disables caching
    pub fn license_cache_path(&self) -> Option<&Path> {
        self.license_cache_path.as_deref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn with_license_cache_path(mut self, path: Option<PathBuf>) -> Self {
        self.license_cache_path = path;
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(LicenseError::Validation {
                message: "timeout must be greater than 0 seconds".to_string(),
            }
            .into());
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }
}
