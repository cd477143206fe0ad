//! # rrdial
//!
//! A DNS round-robin connection dialer for Rust.
//!
//! `rrdial` distributes outbound TCP connections across the full set of IP
//! addresses a hostname resolves to, instead of trusting whatever order the
//! resolver happens to return. Each dial re-resolves the host, sorts the
//! answers into a stable order, and picks the next address in a shared
//! rotation — so concurrent and sequential dials cycle through all backends.
//!
//! ## Features
//!
//! - **Round-robin selection**: a single atomic cursor serializes address
//!   rotation across any number of concurrent dials
//! - **Deterministic ordering**: resolved addresses are sorted by canonical
//!   text form, so rotation is independent of resolver answer order
//! - **Pluggable resolution**: system `getaddrinfo`, async hickory-dns, or
//!   a static override map for tests
//! - **Per-dial configuration**: connect timeout and TCP keep-alive
//! - **HTTP client integration**: a `tower::Service<Uri>` connector that
//!   drops into a hyper-util client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rrdial::dialer::{DialerConfig, Network, RoundRobinDialer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dialer = RoundRobinDialer::new(DialerConfig::default());
//!     let stream = dialer.dial(Network::Tcp, "example.com:80").await.unwrap();
//!     println!("connected to {}", stream.peer_addr().unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions and context helpers
//! - [`connector`] - hyper/tower connector wrapping the dialer
//! - [`dialer`] - The round-robin dialer itself
//! - [`dns`] - Pluggable hostname resolution
//!
//! ## What it deliberately does not do
//!
//! There is no DNS answer cache (every dial re-resolves), no health checking
//! of unreachable addresses, no weighted balancing, and no retry against the
//! next address when a dial fails. One dial attempt targets exactly one
//! address; the caller decides what to do with a failure.

pub mod base;
pub mod connector;
pub mod dialer;
pub mod dns;
