//! DNS Module Tests
//!
//! Covers:
//! - `Name` struct
//! - `StaticResolver` using a MockResolver fallback
//! - `GaiResolver` (Basic System Resolver)

use rrdial::dns::{GaiResolver, Name, Resolve, Resolving, StaticResolver};

use std::borrow::Cow;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

struct MockResolver {
    response: Vec<IpAddr>,
}

impl Resolve for MockResolver {
    fn resolve(&self, _name: Name) -> Resolving {
        let addrs = self.response.clone();
        Box::pin(async move { Ok(addrs) })
    }
}

#[test]
fn test_name_api() {
    let name = Name::new("example.com");
    assert_eq!(name.as_str(), "example.com");
    assert_eq!(name.to_string(), "example.com");
}

#[tokio::test]
async fn test_static_entries() {
    let mock = Arc::new(MockResolver {
        response: vec![IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))],
    });

    let mut entries = HashMap::new();
    entries.insert(
        Cow::Borrowed("local.static"),
        vec![IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))],
    );

    let resolver = StaticResolver::new(mock, entries);
    assert_eq!(resolver.entry_count(), 1);

    // Test static hit
    let addrs = resolver.resolve(Name::new("local.static")).await.unwrap();
    assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))]);

    // Test passthrough (miss)
    let addrs = resolver.resolve(Name::new("other.com")).await.unwrap();
    assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))]);
}

#[tokio::test]
async fn test_static_empty_entry_is_resolution_error() {
    let mock = Arc::new(MockResolver { response: vec![] });

    let mut entries = HashMap::new();
    entries.insert(Cow::Borrowed("drained.static"), vec![]);

    let resolver = StaticResolver::new(mock, entries);
    let err = resolver
        .resolve(Name::new("drained.static"))
        .await
        .unwrap_err();
    assert!(err.is_resolution());
    assert!(err.to_string().contains("drained.static"));
}

#[tokio::test]
async fn test_gai_resolver_localhost() {
    let resolver = GaiResolver::new();
    // localhost should always resolve, usually to 127.0.0.1 or ::1
    let result = resolver.resolve(Name::new("localhost")).await;

    // Depending on system config, this might fail in some CI envs,
    // but usually localhost is standard.
    if let Ok(addrs) = result {
        assert!(!addrs.is_empty());
    } else {
        // Soft fail if network unavailable, but log it
        println!("GaiResolver failed for localhost - possibly no network access");
    }
}
