use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format: {0} (expected `json` or `pretty`)")]
    UnknownLogFormat(String),
}

/// Log line encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,boxoffice_ticketing=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `LOG_FORMAT`; anything missing or invalid keeps its default.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var("LOG_FORMAT").ok().as_deref(),
        )
    }

    fn from_vars(filter: Option<&str>, format: Option<&str>) -> Self {
        let filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string();
        let format = format.and_then(|f| f.parse().ok()).unwrap_or_default();
        Self { filter, format }
    }
}
