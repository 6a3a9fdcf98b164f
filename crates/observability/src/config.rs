use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "MARKETPLACE_LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogConfigError {
    #[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
    UnknownFormat(String),
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-oriented output for local runs.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = LogConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(LogConfigError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directive used when `RUST_LOG` is absent or invalid.
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read the format from `MARKETPLACE_LOG_FORMAT`; unset means JSON.
    pub fn from_env() -> Result<Self, LogConfigError> {
        Self::from_format_var(std::env::var(FORMAT_ENV).ok().as_deref())
    }

    fn from_format_var(value: Option<&str>) -> Result<Self, LogConfigError> {
        let format = match value {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => LogFormat::default(),
        };
        Ok(Self {
            format,
            ..Self::default()
        })
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}
