//! Default values for configuration options.

/// Default output path for `iface-ip init`.
pub const CONFIG_FILE: &str = "iface-ip.toml";
