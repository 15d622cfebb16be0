//! Host interface enumeration via `if_addrs::get_if_addrs`.

use std::net::IpAddr;

use crate::network::{AddressEntry, AddressFetcher, FetchError, InterfaceRecord};

/// [`AddressFetcher`] that reads the live interface table of the host.
///
/// Every call to [`fetch`](AddressFetcher::fetch) performs one OS query.
/// Nothing is cached between calls.
///
/// An entry is `internal` when its address is a loopback address. The
/// interface's own loopback flag is not consulted, since `if-addrs` does not
/// expose interface flags: a non-loopback address bound to `lo` is reported
/// as external.
///
/// # Example
///
/// ```no_run
/// use iface_ip::network::{AddressFetcher, platform::SystemFetcher};
///
/// let fetcher = SystemFetcher::new();
/// let interfaces = fetcher.fetch().expect("Failed to fetch interfaces");
///
/// for interface in interfaces {
///     println!("{}: {} addresses", interface.name, interface.address_count());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemFetcher {
    _private: (),
}

impl SystemFetcher {
    /// Creates a new host interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressFetcher for SystemFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError> {
        let raw = if_addrs::get_if_addrs()?;
        tracing::trace!(entries = raw.len(), "OS returned interface addresses");

        Ok(group_by_interface(raw.into_iter().map(|iface| {
            let ip = iface.ip();
            (iface.name, ip, is_internal(&ip))
        })))
    }
}

/// Scope of a single address: loopback addresses are internal.
const fn is_internal(ip: &IpAddr) -> bool {
    ip.is_loopback()
}

/// Groups a flat `(name, ip, internal)` list into interface records.
///
/// The OS reports one row per address. Interfaces keep the order in which
/// their name first appears; addresses keep their row order.
fn group_by_interface<I>(rows: I) -> Vec<InterfaceRecord>
where
    I: IntoIterator<Item = (String, IpAddr, bool)>,
{
    let mut records: Vec<InterfaceRecord> = Vec::new();

    for (name, ip, internal) in rows {
        let entry = AddressEntry::from_ip(ip, internal);

        if let Some(record) = records.iter_mut().find(|r| r.name == name) {
            record.addresses.push(entry);
        } else {
            records.push(InterfaceRecord::new(name, vec![entry]));
        }
    }

    records
}
