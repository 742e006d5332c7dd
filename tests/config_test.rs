//! Tests for config module

use std::path::Path;
use trendwatch::config::Config;

#[test]
fn test_config_file_exists() {
    let config_path = Path::new("config.toml");
    assert!(
        config_path.exists(),
        "config.toml should exist in project root"
    );
}

#[test]
fn test_shipped_config_loads_and_validates() {
    let config = Config::from_file(Path::new("config.toml")).expect("config.toml should parse");
    assert!(config.validate().is_ok());

    assert_eq!(config.provider.timeframe, "now 7-d");
    assert_eq!(config.provider.courtesy_delay_secs, 3);
    assert_eq!(config.output.path, Path::new("trends_data.json"));
}

#[test]
fn test_missing_config_file_errors() {
    let result = Config::from_file(Path::new("does_not_exist.toml"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_config_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "provider = \"not a table\"").unwrap();

    let result = Config::from_file(&path);
    assert!(result.is_err());
}
