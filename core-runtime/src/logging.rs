//! # Diagnostics Logging
//!
//! Installs the global `tracing` subscriber for the suite.
//!
//! Stdout belongs to the session transcript, so every formatted event goes to
//! **stderr**. By default only warnings are shown; the suite crates can be
//! raised to a chosen level, and a non-empty `RUST_LOG` replaces the computed
//! filter entirely.
//!
//! ```no_run
//! use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//! use tracing::Level;
//!
//! init_logging(
//!     LoggingConfig::default()
//!         .with_format(LogFormat::Json)
//!         .with_level(Level::DEBUG),
//! )?;
//! tracing::debug!("logging ready");
//! # Ok::<(), core_runtime::Error>(())
//! ```

use std::io;

use tracing::Level;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer, Registry};

use crate::error::{Error, Result};

/// Crates raised to the configured level by the default filter.
const SUITE_CRATES: &[&str] = &[
    "media_suite",
    "core_runtime",
    "core_playback",
    "core_service",
    "bridge_traits",
];

/// How events are formatted on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One JSON object per event, with the current span attached
    Json,
    /// Single line per event
    #[default]
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Level applied to the suite crates; everything else stays at `warn`.
    pub level: Level,
    /// Full filter directive string, used instead of the computed one.
    pub filter: Option<String>,
    /// Let a non-empty `RUST_LOG` override `level` and `filter`.
    pub honor_env: bool,
    pub display_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: Level::WARN,
            filter: None,
            honor_env: true,
            display_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_env_override(mut self, honor: bool) -> Self {
        self.honor_env = honor;
        self
    }

    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// - [`Error::Config`] if the filter does not parse
/// - [`Error::Logging`] if a global subscriber is already installed
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = build_filter(&config)?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(config.display_target)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_target(config.display_target)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(config.display_target)
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|e| Error::Logging(format!("Failed to initialize logging: {}", e)))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if config.honor_env {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }

    let directives = match &config.filter {
        Some(custom) => custom.clone(),
        None => default_directives(config.level),
    };
    EnvFilter::try_new(&directives)
        .map_err(|e| Error::Config(format!("Invalid log filter '{}': {}", directives, e)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    std::iter::once("warn".to_string())
        .chain(SUITE_CRATES.iter().map(|krate| format!("{}={}", krate, level)))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let directives = default_directives(Level::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("core_service=debug"));
        assert!(directives.contains("media_suite=debug"));
        assert!(directives.contains("bridge_traits=debug"));
        assert_eq!(directives.matches(',').count(), SUITE_CRATES.len());
    }

    #[test]
    fn test_build_filter_from_level() {
        let config = LoggingConfig::default()
            .with_level(Level::TRACE)
            .with_env_override(false);
        let filter = build_filter(&config).unwrap();
        assert!(filter.to_string().contains("core_playback=trace"));
    }

    #[test]
    fn test_custom_filter_replaces_level() {
        let config = LoggingConfig::default()
            .with_level(Level::TRACE)
            .with_filter("core_service=info")
            .with_env_override(false);
        let filter = build_filter(&config).unwrap().to_string();
        assert!(filter.contains("core_service=info"));
        assert!(!filter.contains("trace"));
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        let config = LoggingConfig::default()
            .with_filter("core_service=loudest")
            .with_env_override(false);
        match build_filter(&config) {
            Err(Error::Config(msg)) => assert!(msg.contains("core_service=loudest")),
            other => panic!("expected config error, got {:?}", other.map(|f| f.to_string())),
        }
    }

    #[test]
    fn test_builder_chaining() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Pretty)
            .with_target(false)
            .with_env_override(false);

        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.display_target);
        assert!(!config.honor_env);
        assert_eq!(config.level, Level::WARN);
    }
}
