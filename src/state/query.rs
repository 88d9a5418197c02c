//! Query configuration types.

/// Address family restriction for the forward lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FamilyFilter {
    /// IPv4 or IPv6.
    #[default]
    Any,
    /// IPv4 only (`-4`).
    Ipv4,
    /// IPv6 only (`-6`).
    Ipv6,
}

/// Socket type restriction for the forward lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SocketTypeFilter {
    /// Every socket type the resolver reports.
    #[default]
    Any,
    /// Stream sockets only (`-t`).
    Stream,
    /// Datagram sockets only (`-u`).
    Datagram,
}

/// A single lookup request.
///
/// Built by the argument parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Host name or literal address to resolve.
    pub host: String,
    /// Service name or port number, if one was given.
    pub service: Option<String>,
    /// Address family restriction.
    pub family: FamilyFilter,
    /// Socket type restriction.
    pub socket_type: SocketTypeFilter,
}

impl Query {
    /// Creates a query with no family or socket type restriction.
    #[must_use]
    pub fn new(host: impl Into<String>, service: Option<String>) -> Self {
        Self {
            host: host.into(),
            service,
            family: FamilyFilter::Any,
            socket_type: SocketTypeFilter::Any,
        }
    }

    /// Whether a service was requested alongside the host.
    #[must_use]
    pub const fn wants_service(&self) -> bool {
        self.service.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_query_has_no_filters() {
        let query = Query::new("example.com", None);
        assert_eq!(query.family, FamilyFilter::Any);
        assert_eq!(query.socket_type, SocketTypeFilter::Any);
        assert!(!query.wants_service());
    }

    #[test]
    fn test_wants_service() {
        let query = Query::new("example.com", Some("80".to_string()));
        assert!(query.wants_service());
    }
}
