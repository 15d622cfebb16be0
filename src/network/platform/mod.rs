//! OS-backed implementation of the [`AddressFetcher`] trait.
//!
//! # Platform Support
//!
//! Enumeration goes through the `if-addrs` crate, which wraps `getifaddrs`
//! on Unix and `GetAdaptersAddresses` on Windows. Platforms it does not
//! support surface as [`FetchError::Unsupported`].
//!
//! [`AddressFetcher`]: super::AddressFetcher
//! [`FetchError::Unsupported`]: super::FetchError::Unsupported

mod system;

pub use system::SystemFetcher;

// Re-export the host fetcher as PlatformFetcher for convenience
pub use system::SystemFetcher as PlatformFetcher;
