//! Configuration loading
//!
//! Builds a validated `GatewayConfig` from environment variables, a `.env`
//! file, or a JSON/TOML config file.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, load_from_lookup, probe_config_paths};
