//! Tracing/logging initialization.
//!
//! Filtering always comes from `RUST_LOG` first; the config only supplies the
//! fallback directive and the output format.

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime);

    let _ = match config.format {
        // JSON logs + timestamps, one object per line.
        LogFormat::Json => builder.json().with_target(false).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
