//! iface-ip: network interface address lookup
//!
//! Entry point for the iface-ip application.

use iface_ip::InterfaceQuery;
use iface_ip::config::{Cli, Command, ValidatedConfig, write_default_config};
use iface_ip::network::platform::PlatformFetcher;
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, report_parse_error, report_query_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    // Handle init subcommand
    if let Command::Init { output } = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_query(&cli.command, &config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Runs one query against the host and prints the result to stdout.
#[cfg(not(tarpaulin_include))]
fn run_query(command: &Command, config: &ValidatedConfig) -> ExitCode {
    let query = InterfaceQuery::new(PlatformFetcher::new());
    let mut stdout = std::io::stdout().lock();

    match run::execute(command, config, &query, &mut stdout) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!("Query failed: {e:?}");
            report_query_error(&e, &mut std::io::stderr())
        }
    }
}
