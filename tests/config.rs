//! Configuration system tests
//!
//! Tests for config paths and assistant config loading/saving.

use std::time::Duration;

use teny::config::AssistConfig;
use teny::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_returns_some() {
    assert!(config_paths::config_dir().is_some());
}

#[test]
fn test_config_dir_contains_teny() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("teny"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let path = config_paths::config_file().unwrap();
    assert!(path.to_string_lossy().ends_with("config.yaml"));
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    let config = config_paths::config_dir().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(
        logs.starts_with(&config),
        "Expected {} under {}",
        logs.display(),
        config.display()
    );
}

// ========================================================================
// AssistConfig Tests
// ========================================================================

#[test]
fn test_default_config() {
    let config = AssistConfig::default();
    assert_eq!(config.service_url, "http://127.0.0.1:5000");
    assert!(config.autocomplete_enabled);
    assert_eq!(config.debounce_ms, 500);
    assert_eq!(config.notification_duration(), Duration::from_secs(3));
    assert_eq!(config.min_context_chars, 2);
    assert_eq!(config.request_timeout(), None);
    assert!(config.export_path().ends_with("texte_malagasy.txt"));
}

#[test]
fn test_config_serialize_deserialize() {
    let config = AssistConfig {
        service_url: "http://nlp.local:8080".to_string(),
        autocomplete_enabled: false,
        request_timeout_ms: Some(1500),
        ..AssistConfig::default()
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: AssistConfig = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let parsed: AssistConfig = serde_yaml::from_str("debounce_ms: 250\n").unwrap();
    assert_eq!(parsed.debounce_ms, 250);
    assert_eq!(parsed.notification_ms, 3000);
    assert_eq!(parsed.service_url, "http://127.0.0.1:5000");
}

#[test]
fn test_save_then_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let config = AssistConfig {
        min_context_chars: 4,
        ..AssistConfig::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(AssistConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = AssistConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, AssistConfig::default());
}

#[test]
fn test_malformed_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "debounce_ms: [not, a, number]\n").unwrap();

    assert_eq!(AssistConfig::load_from(&path), AssistConfig::default());
}
