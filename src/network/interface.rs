//! Core network types for interface representation.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Address family of a single bound address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    /// IPv4 address.
    #[serde(rename = "IPv4")]
    Ipv4,
    /// IPv6 address.
    #[serde(rename = "IPv6")]
    Ipv6,
}

impl AddressFamily {
    /// Returns the family of the given address.
    #[must_use]
    pub const fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::Ipv4,
            IpAddr::V6(_) => Self::Ipv6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv4 => write!(f, "IPv4"),
            Self::Ipv6 => write!(f, "IPv6"),
        }
    }
}

/// One IP address bound to an interface, as reported by the OS at query time.
///
/// The address is kept in its textual form. Lookups by address compare this
/// text literally, so `"::1"` and `"0:0:0:0:0:0:0:1"` are different entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    /// Textual address (e.g., "192.168.1.10", "fe80::1").
    pub address: String,
    /// IPv4 or IPv6.
    pub family: AddressFamily,
    /// True for addresses not routable outside the host (loopback).
    pub internal: bool,
}

impl AddressEntry {
    /// Creates an entry from its raw parts.
    #[must_use]
    pub fn new(address: impl Into<String>, family: AddressFamily, internal: bool) -> Self {
        Self {
            address: address.into(),
            family,
            internal,
        }
    }

    /// Creates an entry from a parsed address, deriving the family from it.
    #[must_use]
    pub fn from_ip(ip: IpAddr, internal: bool) -> Self {
        Self::new(ip.to_string(), AddressFamily::of(&ip), internal)
    }
}

/// A snapshot of one network interface and its addresses.
///
/// Address order is the order reported by the OS and is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// Interface name (e.g., "eth0", "lo", "Wi-Fi").
    pub name: String,
    /// All addresses bound to this interface.
    pub addresses: Vec<AddressEntry>,
}

impl InterfaceRecord {
    /// Creates a new interface record.
    #[must_use]
    pub fn new(name: impl Into<String>, addresses: Vec<AddressEntry>) -> Self {
        Self {
            name: name.into(),
            addresses,
        }
    }

    /// Returns true if this interface has any addresses.
    #[must_use]
    pub fn has_addresses(&self) -> bool {
        !self.addresses.is_empty()
    }

    /// Returns the number of bound addresses.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.addresses.len()
    }
}
