//! Logging setup on top of `tracing-subscriber`.
//!
//! Filter precedence: an explicit level from the command line, then
//! `RUST_LOG`, then [`config::default_log_filter`]. Output goes to stderr so
//! it never mixes with the rendered dashboard or JSON on stdout.

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Overrides both RUST_LOG and the default filter when set.
    pub level: Option<LevelFilter>,
    pub with_ansi: bool,
}

pub fn build_filter(level: Option<LevelFilter>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::new(level.to_string()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(log_config: &LogConfig) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_config.level))
        .with_writer(std::io::stderr)
        .with_ansi(log_config.with_ansi)
        .with_target(false)
        .try_init()
        .map_err(LoggingError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins() {
        let filter = build_filter(Some(LevelFilter::WARN));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn second_init_reports_error() {
        let config = LogConfig::default();
        let _ = init_logging(&config);
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, LoggingError::Init(_)));
        assert!(err.to_string().starts_with("Failed to initialize logging: "));
    }
}
