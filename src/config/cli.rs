//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// iface-ip: network interface address lookup
///
/// Prints the IP addresses bound to an interface, or the interface that
/// owns an address, filtered by IP version and internal/external scope.
#[derive(Debug, Parser)]
#[command(name = "iface-ip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Only match internal (loopback) addresses
    #[arg(long, global = true, conflicts_with = "external")]
    pub internal: bool,

    /// Only match external (non-loopback) addresses
    #[arg(long, global = true)]
    pub external: bool,

    /// Only match addresses of this IP version (4 or 6)
    #[arg(
        long = "ip-version",
        value_name = "VERSION",
        global = true,
        allow_negative_numbers = true
    )]
    pub ip_version: Option<i64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for iface-ip
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the first matching address on an interface
    ToIp {
        /// Interface name (e.g., eth0)
        interface: String,
    },
    /// Print all matching addresses on an interface
    ToIps {
        /// Interface name (e.g., eth0)
        interface: String,
    },
    /// Print the interface that owns an address
    FromIp {
        /// Address to look up, compared literally
        ip: String,
    },
    /// Print every interface with at least one matching address
    List,
    /// Print matching address entries with family and scope
    Addresses {
        /// Interface name (e.g., eth0)
        interface: String,
    },
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments, and also for
    /// `--help`/`--version`, which clap reports as errors.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the scope constraint given on the command line, if any.
    #[must_use]
    pub const fn scope(&self) -> Option<bool> {
        if self.internal {
            Some(true)
        } else if self.external {
            Some(false)
        } else {
            None
        }
    }
}
