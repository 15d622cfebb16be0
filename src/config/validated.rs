//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::network::{FilterOptions, RawFilterOptions};

use super::cli::Cli;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// How query results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One value per line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Address filter applied to every query
    pub options: FilterOptions,

    /// Result output format
    pub output: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ filter: {{ {} }}, output: {} }}",
            self.options, self.output
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptions`] if the merged IP version is
    /// neither 4 nor 6.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let raw = Self::merge_filter(cli, toml);
        let options = FilterOptions::try_from(raw)?;

        let json = cli.json || toml.is_some_and(|t| t.output.json);
        let output = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            options,
            output,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn merge_filter(cli: &Cli, toml: Option<&TomlConfig>) -> RawFilterOptions {
        let file = toml.map(|t| t.filter).unwrap_or_default();

        RawFilterOptions {
            internal: cli.scope().or(file.internal),
            ip_version: cli.ip_version.or(file.ip_version),
        }
    }
}

/// Writes the default configuration template to `path`.
///
/// An existing file is never overwritten.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] if the file already exists or cannot
/// be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    let to_write_error = |e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(to_write_error)?;

    file.write_all(template.as_bytes()).map_err(to_write_error)
}
