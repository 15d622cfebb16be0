//! Interface query facade.
//!
//! Each query reads one fresh snapshot through an [`AddressFetcher`],
//! filters it with [`FilterOptions`], and projects the result:
//!
//! - [`InterfaceQuery::to_ip`]: first matching address on an interface
//! - [`InterfaceQuery::to_ips`]: all matching addresses on an interface
//! - [`InterfaceQuery::from_ip`]: interface that owns an address
//! - [`InterfaceQuery::get_interfaces`]: interfaces with any matching address
//!
//! The free functions in this module do the same against the host using
//! [`SystemFetcher`].
//!
//! [`AddressFetcher`]: crate::network::AddressFetcher
//! [`FilterOptions`]: crate::network::FilterOptions
//! [`SystemFetcher`]: crate::network::platform::SystemFetcher

mod error;
mod facade;

#[cfg(test)]
mod facade_tests;

pub use error::QueryError;
pub use facade::{
    InterfaceQuery, find_addresses, from_ip, get_interfaces, system, to_ip, to_ips,
};
