//! Error types for interface queries.

use thiserror::Error;

use crate::network::FetchError;

/// Error type for query operations.
///
/// Every variant ends the call that produced it. Nothing is retried and
/// no partial result is returned.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The requested interface is not in the host's interface table.
    #[error("Network interface \"{name}\" does not exist")]
    InterfaceNotFound {
        /// The requested interface name
        name: String,
    },

    /// The interface exists but none of its addresses pass the filter.
    #[error("No suitable IP address found on interface \"{interface}\"")]
    NoMatchingAddress {
        /// The interface that was searched
        interface: String,
    },

    /// No interface carries the requested address under the filter.
    #[error("No suitable interfaces were found with IP address \"{ip}\"")]
    NoMatchingInterface {
        /// The address that was searched for
        ip: String,
    },

    /// The OS interface query itself failed.
    #[error("Platform query failed: {0}")]
    PlatformQueryFailed(#[from] FetchError),
}
