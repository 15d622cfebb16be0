//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use iface_ip::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, invalid filter options, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Query error (exit code 2) - unknown interface, no match, OS failure.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn query_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Raw exit code for a clap parse failure.
    ///
    /// `--help` and `--version` arrive as clap errors that print to stdout;
    /// they exit 0. Every other parse failure is a configuration error.
    pub fn parse_error_code(error: &clap::Error) -> u8 {
        u8::from(error.use_stderr())
    }
}

/// Prints a clap parse failure and returns the matching exit code.
pub fn report_parse_error(error: &clap::Error) -> ExitCode {
    // Help and version go to stdout, usage errors to stderr.
    let _ = error.print();
    ExitCode::from(exit_code::parse_error_code(error))
}

/// Writes a failed query's message to `err` and returns the query exit code.
pub fn report_query_error(error: &dyn Display, err: &mut impl Write) -> ExitCode {
    let _ = writeln!(err, "Error: {error}");
    exit_code::query_error()
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::InvalidOptions(_) => {
            eprintln!("\nAccepted --ip-version values: 4, 6.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'iface-ip init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so query results on stdout stay parseable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
