//! Command-line argument definitions.

use clap::{ArgAction, CommandFactory, Parser};

use crate::constants;
use crate::state::{FamilyFilter, Query, SocketTypeFilter};

/// Forward and reverse host lookups through the system name resolver
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    args_override_self = true,
    override_usage = constants::CLI_USAGE
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Print this help on standard error and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Only look up IPv4 addresses
    #[arg(short = '4', overrides_with = "ipv6")]
    pub ipv4: bool,

    /// Only look up IPv6 addresses
    #[arg(short = '6', overrides_with = "ipv4")]
    pub ipv6: bool,

    /// Only look up stream (TCP) endpoints
    #[arg(short = 't', overrides_with = "udp")]
    pub tcp: bool,

    /// Only look up datagram (UDP) endpoints
    #[arg(short = 'u', overrides_with = "tcp")]
    pub udp: bool,

    /// Log resolver activity on standard error (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Host name or literal IPv4/IPv6 address
    #[arg(value_name = "HOST-OR-ADDRESS", required_unless_present = "help")]
    pub host: Option<String>,

    /// Service name or port number
    #[arg(value_name = "SERVICE")]
    pub service: Option<String>,
}

impl Args {
    /// Builds the lookup query.
    ///
    /// Returns `None` when no host was given.
    #[must_use]
    pub fn into_query(self) -> Option<Query> {
        let family = match (self.ipv4, self.ipv6) {
            (true, _) => FamilyFilter::Ipv4,
            (_, true) => FamilyFilter::Ipv6,
            _ => FamilyFilter::Any,
        };
        let socket_type = match (self.tcp, self.udp) {
            (true, _) => SocketTypeFilter::Stream,
            (_, true) => SocketTypeFilter::Datagram,
            _ => SocketTypeFilter::Any,
        };

        Some(Query {
            host: self.host?,
            service: self.service,
            family,
            socket_type,
        })
    }
}

/// Full help text: usage line and option list, without styling.
#[must_use]
pub fn help_text() -> String {
    Args::command().render_help().to_string()
}

/// Short usage line, without styling.
#[must_use]
pub fn usage_text() -> String {
    Args::command().render_usage().to_string()
}
