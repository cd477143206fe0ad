//! DNS round-robin dialer.
//!
//! [`RoundRobinDialer`] establishes outbound TCP connections while rotating
//! through every IP address the target hostname resolves to. Each dial:
//!
//! 1. splits the `host:port` address (forgiving; a missing port defaults
//!    to 80),
//! 2. resolves the host through the configured [`Resolve`] backend,
//! 3. sorts the answers by canonical text form so rotation is independent
//!    of resolver answer order,
//! 4. advances a shared atomic cursor and picks `cursor % len`,
//! 5. connects to that single address with the configured timeout and
//!    TCP keep-alive.
//!
//! A failed connect is not retried against the next address; the error is
//! returned to the caller unchanged. Cancellation is by dropping the dial
//! future: both resolution and the connect are plain await points, so an
//! enclosing `tokio::time::timeout` (or select) aborts the attempt promptly
//! without disturbing rotation state.

use crate::base::neterror::DialError;
use crate::dns::{GaiResolver, Name, Resolve};
use socket2::{Domain, Protocol, Socket, TcpKeepalive, Type};
use std::fmt;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpSocket, TcpStream};

/// Transport selector for a dial, mirroring the `tcp`/`tcp4`/`tcp6`
/// network names accepted by classic dial APIs.
///
/// `Tcp4` and `Tcp6` restrict the resolved address set to that family
/// before rotation; `Tcp` accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    /// TCP over either address family.
    #[default]
    Tcp,
    /// TCP over IPv4 only.
    Tcp4,
    /// TCP over IPv6 only.
    Tcp6,
}

impl Network {
    fn matches(self, ip: &IpAddr) -> bool {
        match self {
            Network::Tcp => true,
            Network::Tcp4 => ip.is_ipv4(),
            Network::Tcp6 => ip.is_ipv6(),
        }
    }
}

impl FromStr for Network {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Network::Tcp),
            "tcp4" => Ok(Network::Tcp4),
            "tcp6" => Ok(Network::Tcp6),
            other => Err(DialError::UnsupportedNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Network::Tcp => "tcp",
            Network::Tcp4 => "tcp4",
            Network::Tcp6 => "tcp6",
        })
    }
}

/// Configuration for [`RoundRobinDialer`].
///
/// All fields are plain durations with stated defaults; none are validated.
/// Zero values are passed through to the socket primitives, whose behavior
/// is inherited.
#[derive(Debug, Clone)]
pub struct DialerConfig {
    /// Upper bound on establishing the TCP connection. Default: 3s.
    pub dial_timeout: Duration,

    /// TCP keep-alive timing on the established connection, applied as
    /// both the idle time before the first probe and the interval between
    /// probes. Default: 10s.
    pub keep_alive: Duration,

    /// Declared lifetime of a cached resolution. Default: 30s.
    ///
    /// Stored but consulted by no caching logic: every dial re-resolves
    /// the hostname. Kept so a resolution cache can be bolted on without
    /// a configuration change.
    pub dns_ttl: Duration,
}

impl Default for DialerConfig {
    fn default() -> Self {
        Self {
            dial_timeout: Duration::from_secs(3),
            keep_alive: Duration::from_secs(10),
            dns_ttl: Duration::from_secs(30),
        }
    }
}

/// A dialer that distributes connections across resolved addresses.
///
/// The only shared mutable state is the rotation cursor, an atomic counter
/// whose fetch-and-add is the entire critical section: resolution and the
/// connect itself run outside it, so concurrent dials never serialize on
/// each other's network I/O. The cursor is monotonically incremented and
/// wraps via modulo at selection time; it is never reset.
///
/// Cheap to share: wrap in an [`Arc`] and clone the handle per task.
pub struct RoundRobinDialer {
    resolver: Arc<dyn Resolve>,
    config: DialerConfig,
    cursor: AtomicU64,
}

impl RoundRobinDialer {
    /// Creates a dialer resolving through the system resolver
    /// ([`GaiResolver`]).
    pub fn new(config: DialerConfig) -> Self {
        Self::with_resolver(config, Arc::new(GaiResolver::new()))
    }

    /// Creates a dialer with a custom resolution backend.
    pub fn with_resolver(config: DialerConfig, resolver: Arc<dyn Resolve>) -> Self {
        Self {
            resolver,
            config,
            cursor: AtomicU64::new(0),
        }
    }

    /// The dialer configuration.
    pub fn config(&self) -> &DialerConfig {
        &self.config
    }

    /// Current value of the rotation cursor.
    ///
    /// Equal to the number of dials that reached address selection since
    /// the dialer was created (dials that failed resolution don't count).
    pub fn rotation(&self) -> u64 {
        self.cursor.load(Ordering::Relaxed)
    }

    /// Dials `addr` (`"host:port"`, port defaulting to 80) over `network`,
    /// connecting to the next resolved address in rotation.
    ///
    /// Resolution failures surface as [`DialError::NameNotResolved`] and
    /// leave the cursor untouched. Connect failures pass through as
    /// [`DialError::Connect`] without a retry against another address.
    pub async fn dial(&self, network: Network, addr: &str) -> Result<TcpStream, DialError> {
        let (host, port) = split_host_port(addr);

        // IP literals skip resolution, like getaddrinfo with AI_NUMERICHOST
        let resolved = match host.parse::<IpAddr>() {
            Ok(ip) => vec![ip],
            Err(_) => self.resolver.resolve(Name::new(host)).await?,
        };

        let addrs = order_addresses(resolved, network);
        if addrs.is_empty() {
            return Err(DialError::no_addresses(host));
        }
        tracing::debug!(host = %host, addrs = ?addrs, "resolved addresses");

        let cursor = self.cursor.fetch_add(1, Ordering::Relaxed);
        let index = (cursor % addrs.len() as u64) as usize;
        let target = SocketAddr::new(addrs[index], port);
        tracing::debug!(%target, cursor, "dialing");

        let stream = connect(target, &self.config).await?;
        if let Err(e) = stream.set_nodelay(true) {
            tracing::warn!(error = %e, "tcp set_nodelay error");
        }
        Ok(stream)
    }
}

impl fmt::Debug for RoundRobinDialer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundRobinDialer")
            .field("config", &self.config)
            .field("cursor", &self.cursor.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Splits `addr` into host and port, tolerating degraded input.
///
/// `"host:1234"` and `"[::1]:1234"` split normally; anything without a
/// parseable port (`"example.com"`, a bare IPv6 literal, a named port) is
/// treated as a host on port 80. Never fails.
pub(crate) fn split_host_port(addr: &str) -> (&str, u16) {
    if let Some((host, port)) = addr.rsplit_once(':') {
        if let Ok(port) = port.parse::<u16>() {
            if let Some(v6) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
                return (v6, port);
            }
            // A colon in the remainder means an unbracketed IPv6 literal,
            // not a host:port pair.
            if !host.contains(':') {
                return (host, port);
            }
        }
    }
    (
        addr.strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(addr),
        80,
    )
}

/// Filters the resolved set by family, then sorts it into the canonical
/// order rotation indexes into: ascending by textual form, duplicates
/// removed. Idempotent and independent of resolver answer order.
fn order_addresses(addrs: Vec<IpAddr>, network: Network) -> Vec<IpAddr> {
    let mut addrs: Vec<IpAddr> = addrs.into_iter().filter(|ip| network.matches(ip)).collect();
    addrs.sort_by_cached_key(|ip| ip.to_string());
    addrs.dedup();
    addrs
}

/// Connects to a single address with the configured timeout and keep-alive.
async fn connect(target: SocketAddr, config: &DialerConfig) -> Result<TcpStream, DialError> {
    let socket = Socket::new(Domain::for_address(target), Type::STREAM, Some(Protocol::TCP))?;

    // Tokio requires O_NONBLOCK when adopting a raw socket.
    socket.set_nonblocking(true)?;

    let mut keepalive = TcpKeepalive::new().with_time(config.keep_alive);
    #[cfg(not(any(target_os = "openbsd", target_os = "redox", target_os = "solaris")))]
    {
        keepalive = keepalive.with_interval(config.keep_alive);
    }
    if let Err(e) = socket.set_tcp_keepalive(&keepalive) {
        tracing::warn!(error = %e, "tcp set_keepalive error");
    }

    let socket = TcpSocket::from_std_stream(socket.into());
    match tokio::time::timeout(config.dial_timeout, socket.connect(target)).await {
        Ok(Ok(stream)) => Ok(stream),
        Ok(Err(e)) => Err(DialError::Connect(e)),
        Err(elapsed) => Err(DialError::Connect(io::Error::new(
            io::ErrorKind::TimedOut,
            elapsed,
        ))),
    }
}
