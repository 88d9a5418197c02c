//! Lookup state types.
//!
//! A [`Query`] is built once from the command line; each forward lookup
//! yields a sequence of [`Endpoint`]s, optionally enriched with a
//! [`ReverseInfo`].

mod endpoint;
mod query;

pub use endpoint::{AddressFamily, Endpoint, Protocol, ReverseInfo};
pub use query::{FamilyFilter, Query, SocketTypeFilter};
