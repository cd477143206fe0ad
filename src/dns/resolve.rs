//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and supporting types that form
//! the foundation of the DNS abstraction layer.

use crate::base::neterror::DialError;
use std::{
    borrow::Cow, collections::HashMap, fmt, future::Future, net::IpAddr, pin::Pin, sync::Arc,
};

/// A domain name to resolve into IP addresses.
///
/// This is a lightweight wrapper around a hostname string that provides
/// a type-safe way to pass domain names to resolvers.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    /// Creates a new [`Name`] from any string-like type.
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    /// View the hostname as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Alias for the `Future` type returned by a DNS resolver.
///
/// The address list is unordered; callers that need a stable order must
/// sort it themselves.
pub type Resolving = Pin<Box<dyn Future<Output = Result<Vec<IpAddr>, DialError>> + Send>>;

/// Trait for DNS resolution.
///
/// Implementations must be thread-safe: a single resolver instance is
/// shared by every concurrent dial.
///
/// # Design Notes
///
/// - Uses `&self` for concurrent resolution without mutable access.
/// - Returns boxed futures for trait object compatibility.
/// - An empty answer set is an error, never an `Ok(vec![])`.
pub trait Resolve: Send + Sync {
    /// Resolves a domain name to its IP addresses.
    fn resolve(&self, name: Name) -> Resolving;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, name: Name) -> Resolving {
        (**self).resolve(name)
    }
}

/// Resolver backed by a static hostname-to-address map.
///
/// Hostnames present in the map resolve without touching the network;
/// anything else falls through to the inner resolver. Useful for:
/// - Testing rotation behavior with a fixed, known address set
/// - Forcing specific IPs for certain domains
/// - Local development with custom hostnames
///
/// # Example
///
/// ```rust,ignore
/// use rrdial::dns::{GaiResolver, Name, StaticResolver};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let mut entries = HashMap::new();
/// entries.insert("api.local".into(), vec!["127.0.0.1".parse().unwrap()]);
///
/// let resolver = StaticResolver::new(Arc::new(GaiResolver::new()), entries);
/// ```
pub struct StaticResolver {
    inner: Arc<dyn Resolve>,
    entries: Arc<HashMap<Cow<'static, str>, Vec<IpAddr>>>,
}

impl StaticResolver {
    /// Creates a new resolver with the given static entries.
    ///
    /// # Arguments
    ///
    /// * `inner` - The fallback resolver for hostnames not in the map.
    /// * `entries` - Map of hostnames to their addresses.
    pub fn new(
        inner: Arc<dyn Resolve>,
        entries: HashMap<Cow<'static, str>, Vec<IpAddr>>,
    ) -> Self {
        Self {
            inner,
            entries: Arc::new(entries),
        }
    }

    /// Returns the number of static entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Resolve for StaticResolver {
    fn resolve(&self, name: Name) -> Resolving {
        // Check the static map first
        if let Some(addrs) = self.entries.get(name.as_str()) {
            if addrs.is_empty() {
                let err = DialError::no_addresses(name.as_str());
                return Box::pin(std::future::ready(Err(err)));
            }
            let addrs = addrs.clone();
            return Box::pin(std::future::ready(Ok(addrs)));
        }
        // Fall back to inner resolver
        self.inner.resolve(name)
    }
}

impl fmt::Debug for StaticResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticResolver")
            .field("entry_count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_name_from_str() {
        let name = Name::from("example.com");
        assert_eq!(name.as_str(), "example.com");
        assert_eq!(name.to_string(), "example.com");
    }

    #[test]
    fn test_name_equality() {
        let name1 = Name::new("example.com");
        let name2 = Name::new("example.com");
        let name3 = Name::new("other.com");

        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }

    struct MockResolver {
        response: Vec<IpAddr>,
    }

    impl Resolve for MockResolver {
        fn resolve(&self, _name: Name) -> Resolving {
            let addrs = self.response.clone();
            Box::pin(async move { Ok(addrs) })
        }
    }

    #[tokio::test]
    async fn test_static_resolver_hit() {
        let mock = Arc::new(MockResolver {
            response: vec![IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))],
        });

        let mut entries = HashMap::new();
        entries.insert(
            Cow::Borrowed("static.local"),
            vec![IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))],
        );

        let resolver = StaticResolver::new(mock, entries);
        let addrs = resolver.resolve(Name::new("static.local")).await.unwrap();

        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))]);
    }

    #[tokio::test]
    async fn test_static_resolver_miss() {
        let mock = Arc::new(MockResolver {
            response: vec![IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))],
        });

        let resolver = StaticResolver::new(mock, HashMap::new());
        let addrs = resolver.resolve(Name::new("not-static.com")).await.unwrap();

        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))]);
    }

    #[tokio::test]
    async fn test_static_resolver_empty_entry_is_error() {
        let mock = Arc::new(MockResolver { response: vec![] });

        let mut entries = HashMap::new();
        entries.insert(Cow::Borrowed("dead.local"), vec![]);

        let resolver = StaticResolver::new(mock, entries);
        let err = resolver.resolve(Name::new("dead.local")).await.unwrap_err();
        assert!(err.is_resolution());
    }
}
