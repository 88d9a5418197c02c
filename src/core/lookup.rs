//! The lookup pipeline.
//!
//! One forward resolution, then one best-effort reverse resolution per
//! printed endpoint. Output goes to the given writer, one line per entry.

use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::core::format;
use crate::resolver::{ResolveError, Resolver};
use crate::state::{Endpoint, Query, SocketTypeFilter};

/// Failure of a lookup run.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The forward resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Whether an endpoint is printed for this query.
///
/// Without a service the resolver returns one entry per socket type for each
/// address; only the protocol-0 entry is kept so each address shows once. An
/// explicit socket type filter already yields one entry per address, so
/// nothing is dropped then.
#[must_use]
pub fn is_listed(query: &Query, endpoint: &Endpoint) -> bool {
    query.wants_service()
        || query.socket_type != SocketTypeFilter::Any
        || endpoint.protocol.is_raw()
}

/// Runs a full lookup for `query` and writes the result lines to `out`.
///
/// # Errors
///
/// Returns [`LookupError::Resolve`] when the forward resolution fails, before
/// anything is written, and [`LookupError::Io`] when writing fails.
pub fn run<R, W>(query: &Query, resolver: &R, out: &mut W) -> Result<(), LookupError>
where
    R: Resolver + ?Sized,
    W: Write + ?Sized,
{
    let endpoints = resolver.forward(query)?;
    info!(
        host = %query.host,
        count = endpoints.len(),
        "forward lookup done"
    );

    if let Some(line) = endpoints
        .first()
        .and_then(|first| format::canonical_line(&query.host, first))
    {
        writeln!(out, "{line}")?;
    }

    let with_service = query.wants_service();
    for endpoint in &endpoints {
        if !is_listed(query, endpoint) {
            trace!(?endpoint, "skipping per-protocol duplicate");
            continue;
        }

        let reverse = endpoint
            .address
            .and_then(|address| resolver.reverse(address, endpoint.protocol));
        if reverse.is_none() {
            debug!(?endpoint.address, "no reverse information");
        }

        writeln!(
            out,
            "{}",
            format::endpoint_line(endpoint, reverse.as_ref(), with_service)
        )?;
    }

    out.flush()?;
    Ok(())
}
