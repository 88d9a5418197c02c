//! Diagnostic logging on standard error.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Maps the number of `-v` flags to a log level.
#[must_use]
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => constants::LOG_LEVEL_DEFAULT,
        n => constants::LOG_LEVELS_VERBOSE[usize::from(n.min(3)) - 1],
    }
}

/// Installs the global tracing subscriber.
///
/// Events go to standard error without colors or timestamps so standard
/// output only ever carries lookup results.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_env_filter(EnvFilter::new(level_for(verbosity)))
        .try_init()
        .map_err(|e| eyre!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(200), "trace");
    }
}
