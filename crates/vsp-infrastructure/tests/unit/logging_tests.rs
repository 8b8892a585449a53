//! Logging helper tests
//!
//! Filter tests run inside a figment `Jail` so `VSP_LOG` changes stay
//! isolated from other tests.

use figment::Jail;
use tempfile::TempDir;
use tracing::Level;
use vsp_domain::error::Error;
use vsp_infrastructure::config::LoggingConfig;
use vsp_infrastructure::logging::{build_env_filter, init_logging, parse_log_level};

#[test]
fn test_parse_log_level_accepts_known_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
    assert_eq!(err.status_hint(), Some(500));
}

#[test]
fn test_warning_alias_filters_as_warn_level() {
    Jail::expect_with(|jail| {
        jail.set_env("VSP_LOG", "");
        let level = parse_log_level("warning").map_err(|e| e.to_string())?;

        let directives = build_env_filter(level).to_string();

        assert!(directives.contains("warn"), "got {directives}");
        assert!(!directives.contains("warning"), "got {directives}");
        Ok(())
    });
}

#[test]
fn test_env_var_overrides_configured_level() {
    Jail::expect_with(|jail| {
        jail.set_env("VSP_LOG", "debug");

        let directives = build_env_filter(Level::ERROR).to_string();

        assert!(directives.contains("debug"), "got {directives}");
        Ok(())
    });
}

// The only test that installs the global subscriber
#[test]
fn test_init_logging_writes_file_and_rejects_second_install() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        level: "info".to_string(),
        json_format: false,
        file_output: Some(temp_dir.path().join("vsp.log")),
    };

    init_logging(&config).expect("first install should succeed");
    tracing::info!("written to the rolling file");

    let err = init_logging(&config).expect_err("second install must fail");
    assert!(matches!(err, Error::Configuration { .. }));

    let written: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("vsp"))
        .collect();
    assert!(!written.is_empty(), "daily log file should be created");
    let content = std::fs::read_to_string(written[0].path()).unwrap();
    assert!(content.contains("Logging initialized"));
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
