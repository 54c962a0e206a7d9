use linkdeck::config::{ApiConfig, StaticConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_then_load_round_trips_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("linkdeck.toml");

    let mut config = StaticConfig::default();
    config.api.base_url = "https://sho.rt".to_string();
    config.logging.level = "debug".to_string();
    config.save_to_file(&path).unwrap();

    let loaded = StaticConfig::try_load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.api.base_url, "https://sho.rt");
    assert_eq!(loaded.api.endpoint(), "https://sho.rt/api/v1");
    assert_eq!(loaded.logging.level, "debug");
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/linkdeck.toml");

    StaticConfig::default().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.toml");
    fs::write(&path, "[api]\nbase_url = \"http://10.0.0.2:8080\"\n").unwrap();

    let loaded = StaticConfig::try_load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.api.base_url, "http://10.0.0.2:8080");
    assert_eq!(loaded.api.base_path, "/api/v1");
    assert_eq!(loaded.logging.format, StaticConfig::default().logging.format);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let loaded = StaticConfig::load_from(path.to_str().unwrap());
    assert_eq!(loaded.api.base_url, ApiConfig::default().base_url);
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[api\nbase_url = ").unwrap();

    let err = StaticConfig::try_load_from(path.to_str().unwrap()).unwrap_err();
    assert_eq!(err.code(), "E005");

    // The lenient loader falls back instead of failing
    let fallback = StaticConfig::load_from(path.to_str().unwrap());
    assert_eq!(fallback.api.base_path, "/api/v1");
}
