//! Read-filter-project queries over one interface snapshot.

use tracing::debug;

use crate::network::platform::SystemFetcher;
use crate::network::{AddressEntry, AddressFetcher, FilterOptions, InterfaceRecord};

use super::QueryError;

/// Query facade over any [`AddressFetcher`].
///
/// Holds no state besides the fetcher. Every method performs exactly one
/// fetch, so results always reflect the host at the time of the call and
/// concurrent calls never share a snapshot.
///
/// # Examples
///
/// ```
/// use iface_ip::network::{
///     AddressEntry, AddressFamily, AddressFetcher, FetchError, FilterOptions, InterfaceRecord,
///     IpVersion,
/// };
/// use iface_ip::query::InterfaceQuery;
///
/// struct Host;
///
/// impl AddressFetcher for Host {
///     fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError> {
///         Ok(vec![InterfaceRecord::new(
///             "eth0",
///             vec![
///                 AddressEntry::new("10.0.0.5", AddressFamily::Ipv4, false),
///                 AddressEntry::new("::1", AddressFamily::Ipv6, true),
///             ],
///         )])
///     }
/// }
///
/// let query = InterfaceQuery::new(Host);
/// let v4 = FilterOptions::new().ip_version(IpVersion::V4);
///
/// assert_eq!(query.to_ip("eth0", &v4).unwrap(), "10.0.0.5");
/// assert_eq!(query.from_ip("::1", &FilterOptions::default()).unwrap(), "eth0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterfaceQuery<F> {
    fetcher: F,
}

impl<F> InterfaceQuery<F> {
    /// Creates a query facade over the given fetcher.
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns a reference to the underlying fetcher.
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: AddressFetcher> InterfaceQuery<F> {
    /// Returns the full, unfiltered interface snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PlatformQueryFailed`] if the OS query fails.
    pub fn interfaces(&self) -> Result<Vec<InterfaceRecord>, QueryError> {
        let interfaces = self.fetcher.fetch()?;
        debug!(count = interfaces.len(), "Fetched interface snapshot");
        Ok(interfaces)
    }

    /// Returns the entries on `interface_name` that pass `options`, in OS order.
    ///
    /// The result may be empty.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InterfaceNotFound`] if the interface does not exist
    /// - [`QueryError::PlatformQueryFailed`] if the OS query fails
    pub fn find_addresses(
        &self,
        interface_name: &str,
        options: &FilterOptions,
    ) -> Result<Vec<AddressEntry>, QueryError> {
        let interfaces = self.interfaces()?;
        select(interfaces, interface_name, options)
    }

    /// Returns the first address on `interface_name` that passes `options`.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InterfaceNotFound`] if the interface does not exist
    /// - [`QueryError::NoMatchingAddress`] if no address passes the filter
    /// - [`QueryError::PlatformQueryFailed`] if the OS query fails
    pub fn to_ip(
        &self,
        interface_name: &str,
        options: &FilterOptions,
    ) -> Result<String, QueryError> {
        self.find_addresses(interface_name, options)?
            .into_iter()
            .next()
            .map(|entry| entry.address)
            .ok_or_else(|| {
                debug!(interface = interface_name, %options, "No address passed the filter");
                QueryError::NoMatchingAddress {
                    interface: interface_name.to_string(),
                }
            })
    }

    /// Returns every address on `interface_name` that passes `options`.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    ///
    /// - [`QueryError::InterfaceNotFound`] if the interface does not exist
    /// - [`QueryError::PlatformQueryFailed`] if the OS query fails
    pub fn to_ips(
        &self,
        interface_name: &str,
        options: &FilterOptions,
    ) -> Result<Vec<String>, QueryError> {
        Ok(self
            .find_addresses(interface_name, options)?
            .into_iter()
            .map(|entry| entry.address)
            .collect())
    }

    /// Returns the name of the first interface with an address equal to `ip`
    /// that passes `options`.
    ///
    /// Interfaces are scanned in OS order. The comparison is literal string
    /// equality: `"0:0:0:0:0:0:0:1"` does not find an interface bound to `"::1"`.
    ///
    /// # Errors
    ///
    /// - [`QueryError::NoMatchingInterface`] if no interface matches
    /// - [`QueryError::PlatformQueryFailed`] if the OS query fails
    pub fn from_ip(&self, ip: &str, options: &FilterOptions) -> Result<String, QueryError> {
        self.interfaces()?
            .into_iter()
            .find(|record| record.matching(options).any(|entry| entry.address == ip))
            .map(|record| record.name)
            .ok_or_else(|| {
                debug!(ip, %options, "No interface carries the address");
                QueryError::NoMatchingInterface { ip: ip.to_string() }
            })
    }

    /// Returns, in OS order, the names of interfaces with at least one
    /// address that passes `options`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::PlatformQueryFailed`] if the OS query fails.
    /// No match at all yields an empty list, not an error.
    pub fn get_interfaces(&self, options: &FilterOptions) -> Result<Vec<String>, QueryError> {
        Ok(self
            .interfaces()?
            .into_iter()
            .filter(|record| record.matching(options).next().is_some())
            .map(|record| record.name)
            .collect())
    }
}

/// Looks up one interface in a snapshot and filters its entries.
fn select(
    interfaces: Vec<InterfaceRecord>,
    interface_name: &str,
    options: &FilterOptions,
) -> Result<Vec<AddressEntry>, QueryError> {
    let record = interfaces
        .into_iter()
        .find(|record| record.name == interface_name)
        .ok_or_else(|| QueryError::InterfaceNotFound {
            name: interface_name.to_string(),
        })?;

    Ok(record
        .addresses
        .into_iter()
        .filter(|entry| options.matches(entry))
        .collect())
}

/// Returns a query facade over the host's live interface table.
#[must_use]
pub const fn system() -> InterfaceQuery<SystemFetcher> {
    InterfaceQuery::new(SystemFetcher::new())
}

/// Host variant of [`InterfaceQuery::find_addresses`].
///
/// # Errors
///
/// See [`InterfaceQuery::find_addresses`].
pub fn find_addresses(
    interface_name: &str,
    options: &FilterOptions,
) -> Result<Vec<AddressEntry>, QueryError> {
    system().find_addresses(interface_name, options)
}

/// Host variant of [`InterfaceQuery::to_ip`].
///
/// # Errors
///
/// See [`InterfaceQuery::to_ip`].
pub fn to_ip(interface_name: &str, options: &FilterOptions) -> Result<String, QueryError> {
    system().to_ip(interface_name, options)
}

/// Host variant of [`InterfaceQuery::to_ips`].
///
/// # Errors
///
/// See [`InterfaceQuery::to_ips`].
pub fn to_ips(interface_name: &str, options: &FilterOptions) -> Result<Vec<String>, QueryError> {
    system().to_ips(interface_name, options)
}

/// Host variant of [`InterfaceQuery::from_ip`].
///
/// # Errors
///
/// See [`InterfaceQuery::from_ip`].
pub fn from_ip(ip: &str, options: &FilterOptions) -> Result<String, QueryError> {
    system().from_ip(ip, options)
}

/// Host variant of [`InterfaceQuery::get_interfaces`].
///
/// # Errors
///
/// See [`InterfaceQuery::get_interfaces`].
pub fn get_interfaces(options: &FilterOptions) -> Result<Vec<String>, QueryError> {
    system().get_interfaces(options)
}
