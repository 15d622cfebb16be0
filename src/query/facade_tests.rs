//! Tests for the interface query facade.

use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{InterfaceQuery, QueryError};
use crate::network::{
    AddressEntry, AddressFamily, AddressFetcher, FetchError, FilterOptions, InterfaceRecord,
    IpVersion,
};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Mock fetcher returning the same snapshot on every call.
struct MockFetcher {
    interfaces: Vec<InterfaceRecord>,
    calls: AtomicUsize,
}

impl MockFetcher {
    fn new(interfaces: Vec<InterfaceRecord>) -> Self {
        Self {
            interfaces,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AddressFetcher for MockFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.interfaces.clone())
    }
}

/// Mock fetcher that fails with the queued error, then with a generic one.
///
/// Uses `Mutex<Option>` to avoid requiring `Clone` on `FetchError`.
struct FailingFetcher {
    error: Mutex<Option<FetchError>>,
}

impl FailingFetcher {
    fn new(error: FetchError) -> Self {
        Self {
            error: Mutex::new(Some(error)),
        }
    }
}

impl AddressFetcher for FailingFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceRecord>, FetchError> {
        Err(self
            .error
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| FetchError::from(io::Error::other("already failed"))))
    }
}

fn v4(address: &str, internal: bool) -> AddressEntry {
    AddressEntry::new(address, AddressFamily::Ipv4, internal)
}

fn v6(address: &str, internal: bool) -> AddressEntry {
    AddressEntry::new(address, AddressFamily::Ipv6, internal)
}

/// The documented single-interface scenario.
fn scenario_host() -> InterfaceQuery<MockFetcher> {
    InterfaceQuery::new(MockFetcher::new(vec![InterfaceRecord::new(
        "eth0",
        vec![v4("10.0.0.5", false), v6("::1", true)],
    )]))
}

/// A host resembling a typical Linux machine.
fn multi_host() -> InterfaceQuery<MockFetcher> {
    InterfaceQuery::new(MockFetcher::new(vec![
        InterfaceRecord::new("lo", vec![v4("127.0.0.1", true), v6("::1", true)]),
        InterfaceRecord::new(
            "eth0",
            vec![
                v4("192.168.1.10", false),
                v6("fe80::a00:27ff:fe4e:66a1", false),
                v4("192.168.1.11", false),
            ],
        ),
        InterfaceRecord::new("wlan0", vec![v6("fe80::1", false)]),
        InterfaceRecord::new("docker0", vec![]),
    ]))
}

fn empty_host() -> InterfaceQuery<MockFetcher> {
    InterfaceQuery::new(MockFetcher::new(vec![]))
}

fn no_filter() -> FilterOptions {
    FilterOptions::default()
}

// ============================================================================
// Scenario
// ============================================================================

mod scenario {
    use super::*;

    #[test]
    fn to_ip_with_version_4() {
        let options = FilterOptions::new().ip_version(IpVersion::V4);
        assert_eq!(scenario_host().to_ip("eth0", &options).unwrap(), "10.0.0.5");
    }

    #[test]
    fn to_ip_with_internal() {
        let options = FilterOptions::new().internal(true);
        assert_eq!(scenario_host().to_ip("eth0", &options).unwrap(), "::1");
    }

    #[test]
    fn to_ips_unfiltered() {
        assert_eq!(
            scenario_host().to_ips("eth0", &no_filter()).unwrap(),
            vec!["10.0.0.5", "::1"]
        );
    }

    #[test]
    fn from_ip_finds_eth0() {
        assert_eq!(
            scenario_host().from_ip("10.0.0.5", &no_filter()).unwrap(),
            "eth0"
        );
    }

    #[test]
    fn to_ip_unknown_interface() {
        let result = scenario_host().to_ip("wlan0", &no_filter());

        assert!(matches!(
            result,
            Err(QueryError::InterfaceNotFound { ref name }) if name == "wlan0"
        ));
    }

    #[test]
    fn from_ip_unknown_address() {
        let result = scenario_host().from_ip("192.168.99.99", &no_filter());

        assert!(matches!(
            result,
            Err(QueryError::NoMatchingInterface { ref ip }) if ip == "192.168.99.99"
        ));
    }
}

// ============================================================================
// find_addresses
// ============================================================================

mod find_addresses {
    use super::*;

    #[test]
    fn returns_matching_entries_in_order() {
        let options = FilterOptions::new().ip_version(IpVersion::V4);
        let entries = multi_host().find_addresses("eth0", &options).unwrap();

        assert_eq!(
            entries,
            vec![v4("192.168.1.10", false), v4("192.168.1.11", false)]
        );
    }

    #[test]
    fn may_be_empty_for_existing_interface() {
        let options = FilterOptions::new().internal(true);
        let entries = multi_host().find_addresses("eth0", &options).unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn interface_without_addresses_is_found() {
        let entries = multi_host().find_addresses("docker0", &no_filter()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn empty_host_reports_not_found() {
        let result = empty_host().find_addresses("lo", &no_filter());
        assert!(matches!(result, Err(QueryError::InterfaceNotFound { .. })));
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let result = multi_host().find_addresses("ETH0", &no_filter());
        assert!(matches!(result, Err(QueryError::InterfaceNotFound { .. })));
    }
}

// ============================================================================
// to_ip / to_ips
// ============================================================================

mod to_ip {
    use super::*;

    #[test]
    fn no_matching_address_when_filter_excludes_all() {
        let options = FilterOptions::new().internal(true);
        let result = multi_host().to_ip("eth0", &options);

        assert!(matches!(
            result,
            Err(QueryError::NoMatchingAddress { ref interface }) if interface == "eth0"
        ));
    }

    #[test]
    fn no_matching_address_for_interface_without_addresses() {
        let result = multi_host().to_ip("docker0", &no_filter());
        assert!(matches!(result, Err(QueryError::NoMatchingAddress { .. })));
    }

    #[test]
    fn interface_not_found_wins_over_no_matching_address() {
        let options = FilterOptions::new().internal(true);
        let result = multi_host().to_ip("missing", &options);

        assert!(matches!(result, Err(QueryError::InterfaceNotFound { .. })));
    }

    #[test]
    fn equals_first_element_of_to_ips() {
        let host = multi_host();
        let option_sets = [
            no_filter(),
            FilterOptions::new().internal(false),
            FilterOptions::new().internal(true),
            FilterOptions::new().ip_version(IpVersion::V4),
            FilterOptions::new().ip_version(IpVersion::V6),
            FilterOptions::new().internal(false).ip_version(IpVersion::V6),
        ];

        for name in ["lo", "eth0", "wlan0", "docker0"] {
            for options in &option_sets {
                let all = host.to_ips(name, options).unwrap();
                match host.to_ip(name, options) {
                    Ok(first) => assert_eq!(Some(&first), all.first()),
                    Err(QueryError::NoMatchingAddress { .. }) => assert!(all.is_empty()),
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
        }
    }
}

mod to_ips {
    use super::*;

    #[test]
    fn unfiltered_equals_raw_address_list() {
        let host = multi_host();

        for record in host.interfaces().unwrap() {
            let raw: Vec<String> = record.addresses.iter().map(|e| e.address.clone()).collect();
            assert_eq!(host.to_ips(&record.name, &no_filter()).unwrap(), raw);
        }
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let options = FilterOptions::new().ip_version(IpVersion::V4);
        let ips = multi_host().to_ips("wlan0", &options).unwrap();

        assert!(ips.is_empty());
    }

    #[test]
    fn unknown_interface_is_an_error() {
        let result = multi_host().to_ips("missing", &no_filter());
        assert!(matches!(result, Err(QueryError::InterfaceNotFound { .. })));
    }
}

// ============================================================================
// from_ip
// ============================================================================

mod from_ip {
    use super::*;

    #[test]
    fn returns_first_interface_in_os_order() {
        // Both carry "::1"; enumeration order wins, not name order.
        let host = InterfaceQuery::new(MockFetcher::new(vec![
            InterfaceRecord::new("zz-first", vec![v6("::1", true)]),
            InterfaceRecord::new("aa-second", vec![v6("::1", true)]),
        ]));

        assert_eq!(host.from_ip("::1", &no_filter()).unwrap(), "zz-first");
    }

    #[test]
    fn respects_filter() {
        let host = multi_host();

        let internal = FilterOptions::new().internal(true);
        assert_eq!(host.from_ip("127.0.0.1", &internal).unwrap(), "lo");

        let external = FilterOptions::new().internal(false);
        assert!(matches!(
            host.from_ip("127.0.0.1", &external),
            Err(QueryError::NoMatchingInterface { .. })
        ));
    }

    #[test]
    fn filter_is_applied_to_the_matching_entry_only() {
        // wlan0's only address is IPv6; an IPv4 filter must not find it.
        let options = FilterOptions::new().ip_version(IpVersion::V4);
        let result = multi_host().from_ip("fe80::1", &options);

        assert!(matches!(result, Err(QueryError::NoMatchingInterface { .. })));
    }

    #[test]
    fn comparison_is_literal() {
        let host = multi_host();

        assert!(host.from_ip("0:0:0:0:0:0:0:1", &no_filter()).is_err());
        assert!(host.from_ip("FE80::1", &no_filter()).is_err());
        assert!(host.from_ip("fe80::1%wlan0", &no_filter()).is_err());
        assert_eq!(host.from_ip("fe80::1", &no_filter()).unwrap(), "wlan0");
    }

    #[test]
    fn zone_suffixed_entries_match_only_verbatim() {
        let host = InterfaceQuery::new(MockFetcher::new(vec![InterfaceRecord::new(
            "eth0",
            vec![v6("fe80::1%eth0", false)],
        )]));

        assert!(host.from_ip("fe80::1", &no_filter()).is_err());
        assert_eq!(host.from_ip("fe80::1%eth0", &no_filter()).unwrap(), "eth0");
    }

    #[test]
    fn empty_host_has_no_matching_interface() {
        let result = empty_host().from_ip("127.0.0.1", &no_filter());
        assert!(matches!(result, Err(QueryError::NoMatchingInterface { .. })));
    }
}

// ============================================================================
// get_interfaces
// ============================================================================

mod get_interfaces {
    use super::*;

    #[test]
    fn unfiltered_excludes_interfaces_without_addresses() {
        assert_eq!(
            multi_host().get_interfaces(&no_filter()).unwrap(),
            vec!["lo", "eth0", "wlan0"]
        );
    }

    #[test]
    fn filters_by_version() {
        let options = FilterOptions::new().ip_version(IpVersion::V4);
        assert_eq!(
            multi_host().get_interfaces(&options).unwrap(),
            vec!["lo", "eth0"]
        );
    }

    #[test]
    fn filters_by_scope() {
        let options = FilterOptions::new().internal(false).ip_version(IpVersion::V6);
        assert_eq!(
            multi_host().get_interfaces(&options).unwrap(),
            vec!["eth0", "wlan0"]
        );
    }

    #[test]
    fn no_match_yields_empty_list() {
        let host = InterfaceQuery::new(MockFetcher::new(vec![InterfaceRecord::new(
            "lo",
            vec![v4("127.0.0.1", true)],
        )]));
        let options = FilterOptions::new().internal(false);

        assert!(host.get_interfaces(&options).unwrap().is_empty());
    }

    #[test]
    fn empty_host_yields_empty_list() {
        assert!(empty_host().get_interfaces(&no_filter()).unwrap().is_empty());
    }

    #[test]
    fn equals_interfaces_with_non_empty_to_ips() {
        let host = multi_host();
        let options = FilterOptions::new().internal(false);

        let expected: Vec<String> = host
            .interfaces()
            .unwrap()
            .into_iter()
            .map(|record| record.name)
            .filter(|name| !host.to_ips(name, &options).unwrap().is_empty())
            .collect();

        assert_eq!(host.get_interfaces(&options).unwrap(), expected);
    }
}

// ============================================================================
// Fetch behavior
// ============================================================================

mod fetching {
    use super::*;

    #[test]
    fn each_operation_fetches_exactly_once() {
        let host = multi_host();

        let _ = host.to_ip("eth0", &no_filter());
        assert_eq!(host.fetcher().calls(), 1);

        let _ = host.to_ips("eth0", &no_filter());
        assert_eq!(host.fetcher().calls(), 2);

        let _ = host.from_ip("::1", &no_filter());
        assert_eq!(host.fetcher().calls(), 3);

        let _ = host.get_interfaces(&no_filter());
        assert_eq!(host.fetcher().calls(), 4);

        let _ = host.find_addresses("missing", &no_filter());
        assert_eq!(host.fetcher().calls(), 5);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let host = multi_host();
        let options = FilterOptions::new().ip_version(IpVersion::V6);

        assert_eq!(
            host.get_interfaces(&options).unwrap(),
            host.get_interfaces(&options).unwrap()
        );
        assert_eq!(
            host.to_ips("eth0", &options).unwrap(),
            host.to_ips("eth0", &options).unwrap()
        );
        assert_eq!(
            host.from_ip("::1", &options).unwrap(),
            host.from_ip("::1", &options).unwrap()
        );
    }

    #[test]
    fn platform_failure_propagates_from_every_operation() {
        let make = || {
            InterfaceQuery::new(FailingFetcher::new(FetchError::PermissionDenied {
                context: "denied".to_string(),
            }))
        };

        assert!(matches!(
            make().to_ip("eth0", &no_filter()),
            Err(QueryError::PlatformQueryFailed(FetchError::PermissionDenied { .. }))
        ));
        assert!(matches!(
            make().to_ips("eth0", &no_filter()),
            Err(QueryError::PlatformQueryFailed(_))
        ));
        assert!(matches!(
            make().from_ip("::1", &no_filter()),
            Err(QueryError::PlatformQueryFailed(_))
        ));
        assert!(matches!(
            make().get_interfaces(&no_filter()),
            Err(QueryError::PlatformQueryFailed(_))
        ));
    }

    #[test]
    fn works_through_a_reference_fetcher() {
        let fetcher = MockFetcher::new(vec![InterfaceRecord::new(
            "lo",
            vec![v4("127.0.0.1", true)],
        )]);
        let query = InterfaceQuery::new(&fetcher);

        assert_eq!(query.to_ip("lo", &no_filter()).unwrap(), "127.0.0.1");
        assert_eq!(fetcher.calls(), 1);
    }

    #[test]
    fn query_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InterfaceQuery<MockFetcher>>();
    }
}

// ============================================================================
// Errors
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn messages_name_the_subject() {
        let not_found = QueryError::InterfaceNotFound {
            name: "wlan0".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            r#"Network interface "wlan0" does not exist"#
        );

        let no_address = QueryError::NoMatchingAddress {
            interface: "eth0".to_string(),
        };
        assert_eq!(
            no_address.to_string(),
            r#"No suitable IP address found on interface "eth0""#
        );

        let no_interface = QueryError::NoMatchingInterface {
            ip: "192.168.99.99".to_string(),
        };
        assert_eq!(
            no_interface.to_string(),
            r#"No suitable interfaces were found with IP address "192.168.99.99""#
        );
    }

    #[test]
    fn platform_failure_wraps_fetch_error() {
        let error = QueryError::from(FetchError::Unsupported {
            context: "no getifaddrs".to_string(),
        });

        assert!(error.to_string().starts_with("Platform query failed:"));
        assert!(error.to_string().contains("no getifaddrs"));
    }
}
