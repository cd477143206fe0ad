//! HTTP client integration.
//!
//! [`RoundRobinConnector`] adapts a [`RoundRobinDialer`] to the
//! `tower::Service<Uri>` contract that hyper-style clients use for their
//! low-level connect step. Installing it replaces the client's default
//! connector, so every request dials through the rotation.
//!
//! # Example
//!
//! ```rust,ignore
//! use hyper_util::client::legacy::Client;
//! use hyper_util::rt::TokioExecutor;
//! use rrdial::connector::RoundRobinConnector;
//! use rrdial::dialer::{DialerConfig, RoundRobinDialer};
//!
//! let connector = RoundRobinConnector::new(RoundRobinDialer::new(DialerConfig::default()));
//! let client: Client<_, http_body_util::Empty<bytes::Bytes>> =
//!     Client::builder(TokioExecutor::new()).build(connector);
//! ```

use crate::base::neterror::DialError;
use crate::dialer::{Network, RoundRobinDialer};
use http::uri::{Scheme, Uri};
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::net::TcpStream;
use tower_service::Service;

/// Connector service that dials through a shared [`RoundRobinDialer`].
///
/// Clones share the dialer, and with it the rotation cursor: a client that
/// clones its connector per request still cycles through the full address
/// set.
#[derive(Clone)]
pub struct RoundRobinConnector {
    dialer: Arc<RoundRobinDialer>,
}

impl RoundRobinConnector {
    /// Wraps a dialer, taking ownership.
    pub fn new(dialer: RoundRobinDialer) -> Self {
        Self {
            dialer: Arc::new(dialer),
        }
    }

    /// Wraps an already-shared dialer.
    pub fn from_shared(dialer: Arc<RoundRobinDialer>) -> Self {
        Self { dialer }
    }

    /// The underlying dialer.
    pub fn dialer(&self) -> &RoundRobinDialer {
        &self.dialer
    }
}

impl std::fmt::Debug for RoundRobinConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundRobinConnector")
            .field("dialer", &self.dialer)
            .finish()
    }
}

impl Service<Uri> for RoundRobinConnector {
    type Response = TokioIo<TcpStream>;
    type Error = DialError;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, dst: Uri) -> Self::Future {
        let dialer = Arc::clone(&self.dialer);
        Box::pin(async move {
            let authority = dial_authority(&dst)?;
            let stream = dialer.dial(Network::Tcp, &authority).await?;
            Ok(TokioIo::new(stream))
        })
    }
}

/// Extracts the `host:port` dial target from a request URI, defaulting the
/// port from the scheme (443 for https, 80 otherwise) and re-bracketing
/// IPv6 hosts.
fn dial_authority(dst: &Uri) -> Result<String, DialError> {
    let host = dst.host().ok_or_else(|| {
        DialError::Connect(io::Error::new(
            io::ErrorKind::InvalidInput,
            "invalid URI, host is missing",
        ))
    })?;

    let port = match dst.port_u16() {
        Some(port) => port,
        None if dst.scheme() == Some(&Scheme::HTTPS) => 443,
        None => 80,
    };

    // Uri::host may or may not keep the brackets of an IPv6 literal
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.contains(':') {
        Ok(format!("[{host}]:{port}"))
    } else {
        Ok(format!("{host}:{port}"))
    }
}
