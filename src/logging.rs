//! Diagnostics setup.
//!
//! Logs go to stderr so they never interleave with the shell's own output on
//! stdout. `RUST_LOG` wins over the configured filter.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Build the filter used by [`init`].
pub fn filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(settings: &LoggingSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
