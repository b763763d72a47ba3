//! Tests for config loading

use super::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_path_ends_with_advisor_config() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/advisor/config.toml"));
    }
}

#[test]
fn test_missing_file_uses_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("missing.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config("[history]\ndefault_count = 5\n");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config.history.default_count, 5);
    assert!(result.warning.is_none());
}

#[test]
fn test_invalid_file_uses_defaults_with_warning() {
    let file = write_config("[history\ndefault_count = ");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("warning for invalid config");
    assert!(warning.starts_with("Invalid config, using defaults"));
}

#[test]
fn test_wrong_type_uses_defaults_with_warning() {
    let result = parse_config("[history]\ndefault_count = \"many\"\n");

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_directory_path_warns() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(dir.path());

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_some());
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    match load_explicit_config(&path) {
        Err(AdvisorError::ConfigRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ConfigRead error, got {:?}", other),
    }
}

#[test]
fn test_explicit_file_is_loaded() {
    let file = write_config("[advice]\nendpoint = \"http://127.0.0.1:9/advice\"\n");
    let result = load_explicit_config(file.path()).unwrap();

    assert_eq!(result.config.advice.endpoint, "http://127.0.0.1:9/advice");
}
