//! Configuration loader
//!
//! Builds a [`GatewayConfig`] from environment variables or a config file.
//!
//! ## Loading Strategy
//! 1. Load `.env` from the working directory if present
//! 2. Read `DK_*` environment variables
//! 3. If required values are missing, probe for a config file
//! 4. JSON and TOML files are supported, detected by extension
//!
//! ## Environment Variables
//! - `DK_BASE_URL`: Gateway root URL
//! - `DK_API_KEY`: Value of the `X-gravitee-api-key` header
//! - `DK_USERNAME`, `DK_PASSWORD`: Merchant credentials
//! - `DK_CLIENT_ID`, `DK_CLIENT_SECRET`: Client credentials
//! - `DK_SOURCE_APP`: Source application identifier
//! - `DK_TIMEOUT`: Read timeout in seconds (default 30)
//! - `DK_OPEN_TIMEOUT`: Connect timeout in seconds (default 10)
//!
//! ## File Locations
//! `./dkpg.json`, `./dkpg.toml`, `./config.json`, `./config.toml`, checked in
//! that order relative to the working directory.

use std::path::{Path, PathBuf};

use dkpg_domain::{DkError, DkResult, GatewayConfig};

const CONFIG_FILE_NAMES: [&str; 4] = ["dkpg.json", "dkpg.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DkError::Configuration` if neither the environment nor a config
/// file yields a complete configuration.
pub fn load() -> DkResult<GatewayConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment configuration incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from `DK_*` environment variables
///
/// A `.env` file in the working directory is loaded first; variables already
/// set in the process environment take precedence over it.
///
/// # Errors
/// Returns `DkError::Configuration` if required variables are missing or a
/// timeout is not a whole number of seconds.
pub fn load_from_env() -> DkResult<GatewayConfig> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from an arbitrary variable lookup
///
/// # Errors
/// Same as [`load_from_env`].
pub fn load_from_lookup<F>(lookup: F) -> DkResult<GatewayConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let text = |key: &str| lookup(key).unwrap_or_default();
    let mut config = GatewayConfig::new()
        .with_base_url(text("DK_BASE_URL"))
        .with_api_key(text("DK_API_KEY"))
        .with_username(text("DK_USERNAME"))
        .with_password(text("DK_PASSWORD"))
        .with_client_id(text("DK_CLIENT_ID"))
        .with_client_secret(text("DK_CLIENT_SECRET"))
        .with_source_app(text("DK_SOURCE_APP"));

    if let Some(secs) = seconds(&lookup, "DK_TIMEOUT")? {
        config = config.with_timeout_secs(secs);
    }
    if let Some(secs) = seconds(&lookup, "DK_OPEN_TIMEOUT")? {
        config = config.with_open_timeout_secs(secs);
    }

    config.validate()?;
    Ok(config)
}

fn seconds<F>(lookup: &F, key: &str) -> DkResult<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| DkError::Configuration(format!("Invalid {key}: {e}"))),
    }
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `DkError::Configuration` if the file is missing or unreadable, the
/// format is invalid, or required fields are missing.
pub fn load_from_file(path: Option<PathBuf>) -> DkResult<GatewayConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DkError::Configuration(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DkError::Configuration("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DkError::Configuration(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> DkResult<GatewayConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DkError::Configuration(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DkError::Configuration(format!("Invalid JSON format: {e}"))),
        _ => Err(DkError::Configuration(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing standard config file in the working directory.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)).find(|path| path.exists())
}
