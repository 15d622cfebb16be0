//! Network layer for fetching and representing interface information.
//!
//! This module provides types and traits for:
//! - Representing interface snapshots ([`InterfaceRecord`], [`AddressEntry`])
//! - Family and scope filtering ([`FilterOptions`], [`IpVersion`])
//! - Fetching the interface table ([`AddressFetcher`])
//! - The OS-backed implementation ([`platform`])

mod fetcher;
pub mod filter;
mod interface;
pub mod platform;


pub use fetcher::{AddressFetcher, FetchError};
pub use filter::{FilterOptions, InvalidOptions, IpVersion, RawFilterOptions, matches};
pub use interface::{AddressEntry, AddressFamily, InterfaceRecord};
