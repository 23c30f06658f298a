//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::error::{Result, configuration_error};

/// Install a stderr fmt subscriber filtered by `RUST_LOG`
///
/// Falls back to `info`, or `debug` when `verbose` is set, if `RUST_LOG` is
/// unset or unparsable.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| configuration_error(&"logging", &e))
}
