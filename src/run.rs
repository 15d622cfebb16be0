//! Query execution and result printing.
//!
//! This module maps a parsed [`Command`] to one facade operation and writes
//! the result to the given output in the configured format.

use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use iface_ip::config::{Command, OutputFormat, ValidatedConfig};
use iface_ip::network::{AddressEntry, AddressFetcher};
use iface_ip::{InterfaceQuery, QueryError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The query itself failed.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Writing the result failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Serializing the result failed.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// The command does not run a query.
    #[error("Command does not run a query")]
    NotAQuery,
}

/// Executes one query command and writes its result to `out`.
///
/// # Errors
///
/// Returns [`RunError::Query`] for lookup misses and OS failures,
/// and an output error if `out` cannot be written.
pub fn execute<F, W>(
    command: &Command,
    config: &ValidatedConfig,
    query: &InterfaceQuery<F>,
    out: &mut W,
) -> Result<(), RunError>
where
    F: AddressFetcher,
    W: Write,
{
    let options = &config.options;
    let format = config.output;

    match command {
        Command::ToIp { interface } => {
            let ip = query.to_ip(interface, options)?;
            tracing::debug!(interface = %interface, ip = %ip, "Resolved address");
            write_value(out, format, &ip)
        }
        Command::ToIps { interface } => {
            let ips = query.to_ips(interface, options)?;
            tracing::debug!(interface = %interface, count = ips.len(), "Resolved addresses");
            write_list(out, format, &ips)
        }
        Command::FromIp { ip } => {
            let name = query.from_ip(ip, options)?;
            tracing::debug!(ip = %ip, interface = %name, "Resolved interface");
            write_value(out, format, &name)
        }
        Command::List => {
            let names = query.get_interfaces(options)?;
            tracing::debug!(count = names.len(), "Listed interfaces");
            write_list(out, format, &names)
        }
        Command::Addresses { interface } => {
            let entries = query.find_addresses(interface, options)?;
            write_entries(out, format, &entries)
        }
        Command::Init { .. } => Err(RunError::NotAQuery),
    }
}

fn write_value<W: Write>(out: &mut W, format: OutputFormat, value: &str) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => writeln!(out, "{value}")?,
        OutputFormat::Json => write_json(out, &value)?,
    }
    Ok(())
}

fn write_list<W: Write>(
    out: &mut W,
    format: OutputFormat,
    values: &[String],
) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => {
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
        OutputFormat::Json => write_json(out, &values)?,
    }
    Ok(())
}

fn write_entries<W: Write>(
    out: &mut W,
    format: OutputFormat,
    entries: &[AddressEntry],
) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                let scope = if entry.internal { "internal" } else { "external" };
                writeln!(out, "{}\t{}\t{scope}", entry.address, entry.family)?;
            }
        }
        OutputFormat::Json => write_json(out, &entries)?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), RunError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
