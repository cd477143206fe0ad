//! Base types and error handling.
//!
//! Provides the crate's foundational types:
//! - [`neterror::DialError`]: the dialer error taxonomy
//! - [`context::IoResultExt`]: ergonomic error-context helpers

pub mod context;
pub mod neterror;
