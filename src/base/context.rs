//! Ergonomic error context helpers.
//!
//! Provides an extension trait for converting IO errors from the
//! resolution path into host-tagged [`DialError`] values.

use crate::base::neterror::DialError;
use std::io;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add DNS resolution context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use rrdial::base::context::IoResultExt;
    ///
    /// let addrs = ("example.com", 0).to_socket_addrs().dns_context("example.com")?;
    /// // Error: "DNS lookup failed for example.com"
    /// ```
    fn dns_context(self, host: &str) -> Result<T, DialError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn dns_context(self, host: &str) -> Result<T, DialError> {
        self.map_err(|e| DialError::name_not_resolved(host, e))
    }
}
