//! Address filtering by family and scope.
//!
//! # Design
//!
//! - **Typed options**: [`FilterOptions`] carries two independent optional
//!   constraints. An unset constraint never excludes an address.
//! - **Boundary validation**: raw input ([`RawFilterOptions`], integers from
//!   CLI or TOML) is converted through [`TryFrom`]. An IP version other than
//!   4 or 6 is rejected with [`InvalidOptions`] instead of being ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AddressEntry, AddressFamily, InterfaceRecord};

/// IP version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum IpVersion {
    /// IPv4 addresses only.
    V4,
    /// IPv6 addresses only.
    V6,
}

impl IpVersion {
    /// Returns the address family this version selects.
    #[must_use]
    pub const fn family(self) -> AddressFamily {
        match self {
            Self::V4 => AddressFamily::Ipv4,
            Self::V6 => AddressFamily::Ipv6,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

impl TryFrom<i64> for IpVersion {
    type Error = InvalidOptions;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            _ => Err(InvalidOptions::IpVersion { value }),
        }
    }
}

impl From<IpVersion> for u8 {
    fn from(version: IpVersion) -> Self {
        match version {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

/// Raw filter values rejected at the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOptions {
    /// IP version was neither 4 nor 6.
    #[error("Invalid IP version {value}: expected 4 or 6")]
    IpVersion {
        /// The rejected value
        value: i64,
    },
}

/// Unvalidated filter options as they arrive from configuration input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFilterOptions {
    /// Scope constraint
    pub internal: Option<bool>,
    /// IP version constraint (must be 4 or 6 when set)
    pub ip_version: Option<i64>,
}

/// Validated filter options.
///
/// `FilterOptions::default()` applies no constraint at all.
///
/// # Examples
///
/// ```
/// use iface_ip::network::{AddressEntry, AddressFamily, FilterOptions, IpVersion};
///
/// let options = FilterOptions::new().internal(true).ip_version(IpVersion::V4);
///
/// let loopback = AddressEntry::new("127.0.0.1", AddressFamily::Ipv4, true);
/// let external = AddressEntry::new("10.0.0.5", AddressFamily::Ipv4, false);
///
/// assert!(options.matches(&loopback));
/// assert!(!options.matches(&external));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFilterOptions")]
pub struct FilterOptions {
    /// If set, only addresses whose internal flag equals this value match.
    pub internal: Option<bool>,
    /// If set, only addresses of this version match.
    pub ip_version: Option<IpVersion>,
}

impl FilterOptions {
    /// Creates options with no constraints.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            internal: None,
            ip_version: None,
        }
    }

    /// Constrains the internal (loopback) flag.
    #[must_use]
    pub const fn internal(mut self, internal: bool) -> Self {
        self.internal = Some(internal);
        self
    }

    /// Constrains the IP version.
    #[must_use]
    pub const fn ip_version(mut self, version: IpVersion) -> Self {
        self.ip_version = Some(version);
        self
    }

    /// Returns true if no constraint is set.
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.internal.is_none() && self.ip_version.is_none()
    }

    /// Returns true if the entry satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, entry: &AddressEntry) -> bool {
        if self.internal.is_some_and(|internal| entry.internal != internal) {
            return false;
        }

        self.ip_version
            .is_none_or(|version| entry.family == version.family())
    }
}

impl TryFrom<RawFilterOptions> for FilterOptions {
    type Error = InvalidOptions;

    fn try_from(raw: RawFilterOptions) -> Result<Self, Self::Error> {
        Ok(Self {
            internal: raw.internal,
            ip_version: raw.ip_version.map(IpVersion::try_from).transpose()?,
        })
    }
}

impl fmt::Display for FilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.internal {
            Some(true) => "internal",
            Some(false) => "external",
            None => "any",
        };
        let version = self
            .ip_version
            .map_or_else(|| "any".to_string(), |v| v.to_string());

        write!(f, "scope: {scope}, version: {version}")
    }
}

/// Returns true if `entry` satisfies every constraint set in `options`.
#[must_use]
pub fn matches(entry: &AddressEntry, options: &FilterOptions) -> bool {
    options.matches(entry)
}

impl InterfaceRecord {
    /// Iterates over this interface's addresses that satisfy `options`, in order.
    pub fn matching<'a>(
        &'a self,
        options: &'a FilterOptions,
    ) -> impl Iterator<Item = &'a AddressEntry> + 'a {
        self.addresses.iter().filter(|entry| options.matches(entry))
    }
}
