//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and
//! usage.

use crate::config::{counter::CounterConfig, ConfigLoader, LogConfig, MakaiConfig, Validate};
use std::fs;
use tempfile::tempdir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MakaiConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.counter.trim_punctuation);
    assert_eq!(config.counter.min_count, 1);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MakaiConfig::default();

    // Invalid counter configuration
    config.counter.min_count = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.counter.min_count = 2;
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test that sub-configurations validate independently.
#[test]
fn test_sub_config_validation() {
    let counter = CounterConfig {
        trim_punctuation: false,
        min_count: 0,
    };
    assert!(counter.validate().is_err());

    let log = LogConfig {
        level: "warn".to_string(),
        ..Default::default()
    };
    assert!(log.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
        [counter]
        trim_punctuation = false
        min_count = 3

        [log]
        level = "debug"
        json = false
        source_location = false
    "#;
    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_FILE");
    let config = loader.load().unwrap();

    assert!(!config.counter.trim_punctuation);
    assert_eq!(config.counter.min_count, 3);
    assert_eq!(config.log.level, "debug");
    assert!(!config.log.source_location);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.toml");

    let loader = ConfigLoader::new(Some(&missing), "MAKAI_TEST_MISSING");
    assert!(matches!(
        loader.load(),
        Err(crate::error::config::ConfigError::FileNotFound(path)) if path == missing
    ));
}

/// Test that a missing default configuration file falls back to built-in
/// defaults instead of failing.
#[test]
fn test_missing_default_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let config = crate::config::load_config_or_default(&missing).unwrap();
    assert!(config.counter.trim_punctuation);
    assert_eq!(config.counter.min_count, 1);
    assert_eq!(config.log.level, "info");
}

/// Test that the fallback only covers a missing file; a broken one still
/// fails.
#[test]
fn test_fallback_does_not_mask_invalid_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[counter]\nmin_count = 0\n").unwrap();

    assert!(crate::config::load_config_or_default(&config_path).is_err());
}

/// Test that an invalid value in a file fails validation on load.
#[test]
fn test_invalid_config_file_rejected() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");

    fs::write(&config_path, "[counter]\nmin_count = 0\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_INVALID");
    assert!(loader.load().is_err());
}
