//! Configuration layer for iface-ip.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--internal`/`--external`, `--ip-version`
//! 2. **TOML config file** - the `[filter]` section
//! 3. **Built-in defaults** - no constraint on either dimension
//!
//! Filter values from either source are validated together in
//! [`ValidatedConfig::from_raw`]. An IP version other than 4 or 6 is
//! rejected with [`ConfigError::InvalidOptions`].
//!
//! # Boolean Flag Semantics
//!
//! `--json` uses OR semantics: if set in either CLI or TOML
//! (`output.json`), the output is JSON.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{OutputSection, TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, write_default_config};
