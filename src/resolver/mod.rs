//! Name resolution seam.
//!
//! The [`Resolver`] trait stands for the platform's name-resolution facility.
//! [`SystemResolver`] implements it on top of the POSIX resolver; tests plug
//! in their own implementation.

#[cfg(unix)]
mod system;

#[cfg(unix)]
pub use system::SystemResolver;

use std::net::SocketAddr;

use thiserror::Error;

use crate::state::{Endpoint, Protocol, Query, ReverseInfo};

/// Failure of a forward lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("getaddrinfo: {description}")]
pub struct ResolveError {
    /// Platform error code (`EAI_*`).
    pub code: i32,
    /// Human-readable description from the platform.
    pub description: String,
}

impl ResolveError {
    /// Creates an error from a platform code and its description.
    #[must_use]
    pub fn new(code: i32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

/// Forward and reverse name resolution.
pub trait Resolver {
    /// Resolves the query's host and service into endpoints, in resolver order.
    ///
    /// The canonical name is requested; only the first endpoint carries it.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the platform reports a lookup failure.
    fn forward(&self, query: &Query) -> Result<Vec<Endpoint>, ResolveError>;

    /// Maps an address back to a host and service name.
    ///
    /// `protocol` selects datagram service names for UDP. Returns `None` on
    /// any failure.
    fn reverse(&self, address: SocketAddr, protocol: Protocol) -> Option<ReverseInfo>;
}
