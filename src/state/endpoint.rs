//! Resolved endpoint types.

use std::net::SocketAddr;

/// Address family of a resolved endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    /// `AF_INET`.
    Ipv4,
    /// `AF_INET6`.
    Ipv6,
    /// Any other family, with the raw identifier reported by the resolver.
    Other(i32),
}

/// Transport protocol of a resolved endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// Protocol 0 (unspecified).
    #[default]
    Raw,
    /// `IPPROTO_ICMP`.
    Icmp,
    /// `IPPROTO_TCP`.
    Tcp,
    /// `IPPROTO_UDP`.
    Udp,
    /// Anything else, with the raw protocol number.
    Unknown(i32),
}

impl Protocol {
    /// Upper-case label used in output lines.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Raw => "RAW",
            Self::Icmp => "ICMP",
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Whether this is the unspecified protocol 0.
    #[must_use]
    pub const fn is_raw(self) -> bool {
        matches!(self, Self::Raw)
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// One entry returned by a forward lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Address family as reported by the resolver.
    pub family: AddressFamily,
    /// Socket address; `None` when the family is not IPv4 or IPv6.
    pub address: Option<SocketAddr>,
    /// Transport protocol.
    pub protocol: Protocol,
    /// Canonical host name. Only the first endpoint of a lookup carries it.
    pub canonical_name: Option<String>,
}

impl Endpoint {
    /// Port of the endpoint, if it has an IP address.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.address.map(|addr| addr.port())
    }
}

/// Result of a successful reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseInfo {
    /// Host name the address maps back to.
    pub host: String,
    /// Service name the port maps back to.
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_description() {
        assert_eq!(Protocol::Raw.description(), "RAW");
        assert_eq!(Protocol::Icmp.description(), "ICMP");
        assert_eq!(Protocol::Tcp.description(), "TCP");
        assert_eq!(Protocol::Udp.description(), "UDP");
        assert_eq!(Protocol::Unknown(132).description(), "UNKNOWN");
    }

    #[test]
    fn test_protocol_is_raw() {
        assert!(Protocol::Raw.is_raw());
        assert!(!Protocol::Tcp.is_raw());
        assert!(!Protocol::Unknown(0).is_raw());
    }

    #[test]
    fn test_endpoint_port() {
        let endpoint = Endpoint {
            family: AddressFamily::Ipv4,
            address: Some("192.0.2.1:443".parse().unwrap()),
            protocol: Protocol::Tcp,
            canonical_name: None,
        };
        assert_eq!(endpoint.port(), Some(443));

        let other = Endpoint {
            family: AddressFamily::Other(17),
            address: None,
            protocol: Protocol::Raw,
            canonical_name: None,
        };
        assert_eq!(other.port(), None);
    }
}
