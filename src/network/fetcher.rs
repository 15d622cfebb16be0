//! Interface fetching trait and error types.

use std::io;

use super::InterfaceRecord;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The OS enumeration call failed.
    #[error("Interface enumeration failed: {0}")]
    Io(#[source] io::Error),

    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Interface enumeration is not available on this platform.
    #[error("Interface enumeration unsupported: {context}")]
    Unsupported {
        /// Message reported by the platform.
        context: String,
    },
}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                context: error.to_string(),
            },
            io::ErrorKind::Unsupported => Self::Unsupported {
                context: error.to_string(),
            },
            _ => Self::Io(error),
        }
    }
}

/// Trait for fetching the host's interface table.
///
/// # Design
///
/// - The OS-backed implementation lives in [`super::platform`]
/// - Enables dependency injection for testing with mock implementations
///
/// # Example
///
/// ```
/// use iface_ip::network::{AddressFetcher, FetchError, InterfaceRecord};
///
/// struct FixedFetcher(Vec<InterfaceRecord>);
///
/// impl AddressFetcher for FixedFetcher {
///     fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let fetcher = FixedFetcher(vec![InterfaceRecord::new("lo", vec![])]);
/// assert_eq!(fetcher.fetch().unwrap()[0].name, "lo");
/// ```
pub trait AddressFetcher: Send + Sync {
    /// Fetches a fresh snapshot of every interface on the host.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the OS enumeration call fails or is
    /// not permitted.
    ///
    /// # Implementation Notes
    ///
    /// - Return ALL interfaces; filtering is done by the caller
    /// - Interfaces must appear in OS enumeration order, addresses in OS order
    /// - Do not cache: each call reflects the host state at that moment
    fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError>;
}

impl<T: AddressFetcher + ?Sized> AddressFetcher for &T {
    fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError> {
        (*self).fetch()
    }
}
