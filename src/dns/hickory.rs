//! Async DNS resolver using hickory-dns.
//!
//! This resolver provides fully async DNS resolution with support for:
//! - DNS-over-HTTPS (DoH)
//! - DNS-over-TLS (DoT)
//! - System DNS configuration auto-detection
//! - Dual-stack IPv4 + IPv6 lookup

use super::{Name, Resolve, Resolving};
use crate::base::neterror::DialError;
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    TokioResolver,
};
use std::{net::IpAddr, sync::LazyLock};

/// Async DNS resolver backed by hickory-dns.
///
/// This resolver is lazily initialized on first use and shared across
/// all instances via a static `LazyLock`. It automatically configures
/// itself based on the system's DNS settings.
///
/// Unlike `GaiResolver`, this resolver doesn't spawn blocking tasks and
/// maintains connection pools to DNS servers for better performance
/// under load.
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver`.
    ///
    /// The underlying resolver is lazily initialized on first DNS query.
    /// It will attempt to read system DNS configuration; if that fails,
    /// it falls back to sensible defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };

            // Both families, so rotation covers v4 and v6 backends alike
            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let domain = name.as_str();
            tracing::debug!(domain = %domain, "resolving via hickory-dns");

            let lookup = resolver.resolver.lookup_ip(domain).await.map_err(|e| {
                tracing::debug!(domain = %domain, error = %e, "hickory-dns lookup failed");
                DialError::name_not_resolved(
                    domain,
                    std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
                )
            })?;

            let addrs: Vec<IpAddr> = lookup.iter().collect();

            if addrs.is_empty() {
                return Err(DialError::no_addresses(domain));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "hickory-dns resolution complete");
            Ok(addrs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hickory_resolver_invalid_domain() {
        let resolver = HickoryResolver::new();
        let result = resolver
            .resolve(Name::new("this-domain-definitely-does-not-exist.invalid"))
            .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            DialError::NameNotResolved { host, .. } => {
                assert_eq!(host, "this-domain-definitely-does-not-exist.invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hickory_resolver_is_clone() {
        let r1 = HickoryResolver::new();
        let r2 = r1.clone();
        // Both should point to the same static resolver
        assert!(std::ptr::eq(r1.resolver, r2.resolver));
    }
}
