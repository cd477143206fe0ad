use std::io;
use thiserror::Error;

/// Errors produced by a single dial attempt.
///
/// There are exactly two failure classes in the dial contract: the host
/// could not be resolved, or the connect to the chosen address failed.
/// Connect failures are passed through unmodified so callers can inspect
/// the original [`io::Error`] (refused, unreachable, timed out).
#[derive(Debug, Error)]
pub enum DialError {
    /// The resolver failed for the host, or returned no addresses.
    ///
    /// Fatal to the dial attempt. The dialer never retries or falls back
    /// to a fixed address, and the rotation cursor is not advanced.
    #[error("DNS lookup failed for {host}")]
    NameNotResolved {
        /// The hostname that failed to resolve.
        host: String,
        /// The underlying resolver error.
        #[source]
        source: io::Error,
    },

    /// The network selector was not one of `tcp`, `tcp4`, `tcp6`.
    #[error("unsupported network {0:?}")]
    UnsupportedNetwork(String),

    /// The connect to the selected address failed.
    ///
    /// Surfaced verbatim from the socket primitives; a connect that ran
    /// out of the configured dial timeout arrives here with
    /// [`io::ErrorKind::TimedOut`].
    #[error(transparent)]
    Connect(#[from] io::Error),
}

impl DialError {
    /// Builds a resolution error tagging the failed host.
    pub fn name_not_resolved(host: impl Into<String>, source: io::Error) -> Self {
        DialError::NameNotResolved { host: host.into(), source }
    }

    /// Builds a resolution error for a host whose answer set was empty.
    pub fn no_addresses(host: impl Into<String>) -> Self {
        DialError::NameNotResolved {
            host: host.into(),
            source: io::Error::new(io::ErrorKind::NotFound, "no addresses returned by resolver"),
        }
    }

    /// True if this is a resolution failure rather than a connect failure.
    pub fn is_resolution(&self) -> bool {
        matches!(self, DialError::NameNotResolved { .. })
    }
}
