//! Tracing/logging setup shared by every process that hosts the box office.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&config::ObservabilityConfig::from_env());
}

/// Configuration for log filtering and output format.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};
