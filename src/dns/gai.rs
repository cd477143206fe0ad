//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native DNS resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async runtime.
//!
//! # When to Use
//!
//! - When you need to respect system DNS configuration (/etc/resolv.conf, etc.)
//! - When DoH/DoT is not required
//! - As a fallback when hickory-dns is not available

use super::{Name, Resolve, Resolving};
use crate::base::context::IoResultExt;
use crate::base::neterror::DialError;
use std::net::{IpAddr, ToSocketAddrs};

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait and
/// executes resolution in `tokio::task::spawn_blocking` to avoid blocking
/// the async runtime. It is the default backend of the round-robin dialer:
/// whatever `/etc/hosts` entries, search domains, and nameservers the host
/// OS is configured with apply unchanged.
///
/// # Performance
///
/// Each resolution spawns a blocking task. For high-throughput scenarios,
/// consider using `HickoryResolver` which is fully async.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.map(|sa| sa.ip()).collect::<Vec<IpAddr>>())
            })
            .await;

            // Handle task join error (cancellation, panic)
            let addrs = result
                .map_err(|e| {
                    tracing::error!(error = %e, "DNS resolution task failed");
                    DialError::name_not_resolved(
                        domain.as_str(),
                        std::io::Error::new(std::io::ErrorKind::Other, e),
                    )
                })?
                .map_err(|e| {
                    tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
                    e
                })
                .dns_context(&domain)?;

            if addrs.is_empty() {
                return Err(DialError::no_addresses(domain.as_str()));
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok(addrs)
        })
    }
}
