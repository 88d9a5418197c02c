//! Application-wide constants.
//!
//! Output line fragments and exit codes used throughout hostlookup.

// === Application Metadata ===

/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Command Line ===

/// Usage line shown in help and usage errors.
pub const CLI_USAGE: &str = "hostlookup [-h] [-4|-6] [-t|-u] [-v] <HOST-OR-ADDRESS> [SERVICE]";

// === Exit Codes ===

/// Exit status for command-line usage errors.
pub const EXIT_USAGE: u8 = 2;

// === Output Lines ===

/// Prefix of the canonical name line.
pub const OUT_CANONICAL_NAME: &str = "Canonical name ";
/// Prefix of an IPv4 endpoint line.
pub const OUT_IPV4_ADDRESS: &str = "IPv4 address ";
/// Prefix of an IPv6 endpoint line.
pub const OUT_IPV6_ADDRESS: &str = "IPv6 address ";
/// Prefix of the line for an endpoint of unknown family.
pub const OUT_UNKNOWN_RECORD: &str = "Unknown record type ";

// === Logging ===

/// Log level with no `-v`.
pub const LOG_LEVEL_DEFAULT: &str = "warn";
/// Log levels selected by one, two and three or more `-v`.
pub const LOG_LEVELS_VERBOSE: [&str; 3] = ["info", "debug", "trace"];
