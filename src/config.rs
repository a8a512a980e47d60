//! Configuration file support for datacert.
//!
//! Provides YAML-based configuration through `datacert.config.yml` files,
//! including loading, validation and merging with command-line options.

use anyhow::{bail, Context};
use datacert::application::dto::{
    OutputFormat, DEFAULT_CHECK_TIMEOUT, DEFAULT_MAX_CONCURRENT_CHECKS,
};
use datacert::certification::domain::RiskBand;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use datacert::shared::Result;

pub const CONFIG_FILENAME: &str = "datacert.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub exclude_files: Option<Vec<String>>,
    pub seed: Option<u64>,
    pub max_concurrent_checks: Option<usize>,
    pub check_timeout_secs: Option<u64>,
    pub fail_on: Option<String>,
    /// Base URL for the certificate verification link.
    pub verification_base_url: Option<String>,
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
    tracing::debug!(path = %path.display(), "config loaded");

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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref band) = config.fail_on {
        if let Err(e) = band.parse::<RiskBand>() {
            bail!(
                "Invalid config: fail_on: {}\n\n\
                 💡 Hint: Use one of LOW, GUARDED, MEDIUM, HIGH, CRITICAL.",
                e
            );
        }
    }

    if let Some(ref url) = config.verification_base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            bail!(
                "Invalid config: verification_base_url must be an http(s) URL, got '{}'\n\n\
                 💡 Hint: For example `verification_base_url: https://certs.example.org/cert`.",
                url
            );
        }
    }

    if config.max_concurrent_checks == Some(0) {
        bail!(
            "Invalid config: max_concurrent_checks must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of {}.",
            DEFAULT_MAX_CONCURRENT_CHECKS
        );
    }

    if config.check_timeout_secs == Some(0) {
        bail!(
            "Invalid config: check_timeout_secs must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of {} seconds.",
            DEFAULT_CHECK_TIMEOUT.as_secs()
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

/// Effective run settings after merging CLI options over the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub certificate: Option<PathBuf>,
    pub exclude_patterns: Vec<String>,
    pub seed: Option<u64>,
    pub fail_on: Option<RiskBand>,
    pub max_concurrent_checks: usize,
    pub check_timeout: Duration,
    pub verification_base_url: Option<String>,
}

impl Settings {
    /// Scalars from the CLI win; exclusion patterns from both sources are
    /// combined, config first, without duplicates.
    pub fn merge(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let fail_on = match args.fail_on {
            Some(band) => Some(band),
            None => config
                .fail_on
                .as_deref()
                .map(str::parse::<RiskBand>)
                .transpose()
                .map_err(anyhow::Error::msg)?,
        };

        let mut exclude_patterns = config.exclude_files.unwrap_or_default();
        for pattern in args.exclude {
            if !exclude_patterns.contains(&pattern) {
                exclude_patterns.push(pattern);
            }
        }

        Ok(Self {
            input: args.input,
            format: args.format.or(config.format).unwrap_or_default(),
            output: args.output,
            certificate: args.certificate,
            exclude_patterns,
            seed: args.seed.or(config.seed),
            fail_on,
            max_concurrent_checks: config
                .max_concurrent_checks
                .unwrap_or(DEFAULT_MAX_CONCURRENT_CHECKS),
            check_timeout: config
                .check_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_CHECK_TIMEOUT),
            verification_base_url: config.verification_base_url,
        })
    }
}
