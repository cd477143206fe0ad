//! DNS Resolution Module
//!
//! Provides pluggable hostname resolution with support for:
//! - System resolver (getaddrinfo via thread pool)
//! - Async hickory-dns resolver (DoH/DoT capable)
//! - Static hostname-to-IP override map for tests and local development
//!
//! # Architecture
//!
//! The [`Resolve`] trait is the core abstraction: given a hostname it
//! produces the raw set of IP addresses, in whatever order the backend
//! happens to return them. Resolvers carry no port and impose no ordering;
//! the dialer owns deterministic ordering and address selection, so any
//! backend can be swapped in without changing rotation behavior.
//!
//! # Example
//!
//! ```rust,ignore
//! use rrdial::dns::{GaiResolver, Name, Resolve};
//!
//! let resolver = GaiResolver::new();
//! let ips = resolver.resolve(Name::new("example.com")).await?;
//! for ip in ips {
//!     println!("Resolved: {}", ip);
//! }
//! ```

mod gai;
mod hickory;
mod resolve;

pub use gai::GaiResolver;
pub use hickory::HickoryResolver;
pub use resolve::{Name, Resolve, Resolving, StaticResolver};
