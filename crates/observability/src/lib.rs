//! Tracing/logging setup shared by every marketplace binary.

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. An
/// unreadable `MARKETPLACE_LOG_FORMAT` falls back to JSON output.
pub fn init() {
    tracing::init_with(&LogConfig::from_env().unwrap_or_default());
}

/// Initialize process-wide logging with an explicit configuration.
pub fn init_with(config: &LogConfig) {
    tracing::init_with(config);
}

/// Log configuration (filter + output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogConfig, LogConfigError, LogFormat};
