//! iface-ip: network interface address lookup
//!
//! A library for querying the host's network interfaces and the IP
//! addresses bound to them, filtered by IP version and internal/external
//! scope.
//!
//! ```no_run
//! use iface_ip::{FilterOptions, IpVersion};
//!
//! let options = FilterOptions::new().internal(false).ip_version(IpVersion::V4);
//! let ip = iface_ip::to_ip("eth0", &options)?;
//! let owner = iface_ip::from_ip(&ip, &FilterOptions::default())?;
//! assert_eq!(owner, "eth0");
//! # Ok::<(), iface_ip::QueryError>(())
//! ```

pub mod config;
pub mod network;
pub mod query;

pub use network::{FilterOptions, IpVersion};
pub use query::{
    InterfaceQuery, QueryError, find_addresses, from_ip, get_interfaces, to_ip, to_ips,
};
