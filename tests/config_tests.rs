//! Configuration loading tests
//!
//! Files are written to temporary directories. Nothing here sets `LD__*`
//! variables; environment layering is covered next to the loader.

use std::fs;

use linkdesk::config::StaticConfig;
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let config = StaticConfig::load_from(&path.to_string_lossy()).unwrap();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.ui.copy_revert_ms, 2000);
    assert_eq!(config.ui.destination_width, 50);
    assert_eq!(config.logging.format, "text");
}

#[test]
fn test_file_values_override_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://sho.rt/api"
timeout_secs = 3

[ui]
destination_width = 30

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = StaticConfig::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://sho.rt/api");
    assert_eq!(config.api.timeout_secs, 3);
    assert_eq!(config.ui.destination_width, 30);
    assert_eq!(config.ui.copy_revert_ms, 2000);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.api.base_url().unwrap().host_str(), Some("sho.rt"));
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "[logging]\nformat = \"xml\"\n");
    assert!(StaticConfig::load_from(&path).is_err());

    let path = write_config(&dir, "[api]\nbase_url = \"not a url\"\n");
    assert!(StaticConfig::load_from(&path).is_err());

    // load() never fails; it falls back to defaults
    let config = StaticConfig::load(Some(path.as_str()));
    assert_eq!(config, StaticConfig::default());
}

#[test]
fn test_generated_sample_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    StaticConfig::default().save_to_file(&path).unwrap();

    let loaded = StaticConfig::load_from(&path.to_string_lossy()).unwrap();
    assert_eq!(loaded.api, StaticConfig::default().api);
    assert!(StaticConfig::generate_sample_config().contains("[api]"));
}
