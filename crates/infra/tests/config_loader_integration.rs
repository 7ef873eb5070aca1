//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::fs;

use dkpg_domain::DkError;
use dkpg_infra::{config, GatewayClient};

#[test]
fn test_load_config_from_json_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dkpg.json");
    fs::write(
        &path,
        r#"{
            "base_url": "https://gateway.example.bt",
            "api_key": "json-api-key",
            "username": "merchant",
            "password": "secret",
            "client_id": "client",
            "client_secret": "client-secret",
            "source_app": "SRC_AVS_0201",
            "timeout_secs": 60
        }"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("JSON config should load");

    assert_eq!(config.base_url, "https://gateway.example.bt");
    assert_eq!(config.api_key, "json-api-key");
    assert_eq!(config.timeout_secs, 60);
    assert_eq!(config.open_timeout_secs, 10);
    assert!(GatewayClient::new(config).is_ok());
}

#[test]
fn test_load_config_from_toml_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dkpg.toml");
    fs::write(
        &path,
        r#"
base_url = "https://uat.gateway.example.bt"
api_key = "toml-api-key"
username = "merchant"
password = "secret"
client_id = "client"
client_secret = "client-secret"
source_app = "SRC_AVS_0201"
open_timeout_secs = 3
"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_file(Some(path)).expect("TOML config should load");

    assert_eq!(config.base_url, "https://uat.gateway.example.bt");
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.open_timeout_secs, 3);
}

#[test]
fn test_incomplete_file_lists_missing_fields() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"base_url": "https://gateway.example.bt", "api_key": "k"}"#)
        .expect("Failed to write config");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert_eq!(
        err,
        DkError::Configuration(
            "Missing required configuration fields: username, password, client_id, client_secret, source_app"
                .into()
        )
    );
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dkpg.toml");
    fs::write(&path, "base_url = ").expect("Failed to write config");

    let err = config::load_from_file(Some(path)).unwrap_err();
    assert!(matches!(err, DkError::Configuration(_)));
    assert!(err.message().starts_with("Invalid TOML format"));
}
