//! Output line rendering.

use std::fmt::Write as _;

use crate::constants;
use crate::state::{AddressFamily, Endpoint, ReverseInfo};

/// Renders the canonical name line for the first endpoint of a lookup.
///
/// Returns `None` when the resolver reported no canonical name, or when it
/// only repeats the queried host (ignoring ASCII case).
#[must_use]
pub fn canonical_line(host: &str, first: &Endpoint) -> Option<String> {
    let name = first.canonical_name.as_deref()?;
    if name.eq_ignore_ascii_case(host) {
        return None;
    }
    Some(format!("{}{name}", constants::OUT_CANONICAL_NAME))
}

/// Renders one endpoint line.
///
/// `with_service` controls whether the protocol and port are shown and which
/// form the reverse annotation takes.
#[must_use]
pub fn endpoint_line(
    endpoint: &Endpoint,
    reverse: Option<&ReverseInfo>,
    with_service: bool,
) -> String {
    let label = match endpoint.family {
        AddressFamily::Ipv4 => constants::OUT_IPV4_ADDRESS,
        AddressFamily::Ipv6 => constants::OUT_IPV6_ADDRESS,
        AddressFamily::Other(id) => return format!("{}{id}", constants::OUT_UNKNOWN_RECORD),
    };

    let mut line = String::from(label);
    if let Some(address) = endpoint.address {
        let _ = write!(line, "{}", address.ip());
    }

    if with_service {
        let _ = write!(
            line,
            ", {} port {}",
            endpoint.protocol,
            endpoint.port().unwrap_or_default()
        );
    }

    match (reverse, with_service) {
        (Some(info), false) => {
            let _ = write!(line, ", reverse {}", info.host);
        }
        (Some(info), true) => {
            let _ = write!(
                line,
                ", reverse name {} service {}",
                info.host, info.service
            );
        }
        (None, _) => {}
    }

    line
}
