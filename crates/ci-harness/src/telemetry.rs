//! Logging setup for the binary.
//!
//! Logs go to stderr so stdout carries only the summary. The filter comes
//! from `RUST_LOG` and defaults to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Install the global `tracing` subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
