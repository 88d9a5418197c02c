//! hostlookup: forward and reverse host lookups through the system resolver.
//!
//! A [`Query`](state::Query) is resolved into endpoints by a
//! [`Resolver`](resolver::Resolver); each endpoint is then mapped back to a
//! name and printed on its own line.

#[cfg(not(unix))]
compile_error!("hostlookup uses the POSIX getaddrinfo/getnameinfo resolver");

pub mod cli;
pub mod constants;
pub mod core;
pub mod logger;
pub mod resolver;
pub mod state;
