//! Integration tests for logging and configuration

use core_runtime::config::{EndOfInputPolicy, SuiteConfig};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_runtime::Error;
use tracing::Level;

#[test]
fn test_logging_initialization_once_per_process() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(Level::DEBUG)
        .with_env_override(false);

    init_logging(config.clone()).expect("first initialization succeeds");

    // A global subscriber is now installed; a second attempt must fail
    let err = init_logging(config).unwrap_err();
    assert!(matches!(err, Error::Logging(_)));
    assert!(err.to_string().contains("Failed to initialize logging"));

    tracing::debug!(target: "core_runtime", "logging is live");
}

#[test]
fn test_invalid_filter_rejected_before_install() {
    let config = LoggingConfig::default()
        .with_filter("core_service=loudest")
        .with_env_override(false);
    assert!(matches!(init_logging(config), Err(Error::Config(_))));
}

#[test]
fn test_defaults_keep_diagnostics_quiet() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, Level::WARN);
    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.honor_env);
    assert!(config.filter.is_none());
}

#[test]
fn test_suite_config_carries_logging() {
    let config = SuiteConfig::builder()
        .end_of_input(EndOfInputPolicy::Strict)
        .logging(LoggingConfig::default().with_filter("core_service=debug"))
        .build()
        .unwrap();

    assert_eq!(config.end_of_input, EndOfInputPolicy::Strict);
    assert_eq!(config.logging.filter.as_deref(), Some("core_service=debug"));
    assert!(format!("{:?}", config).contains("SuiteConfig"));
}
