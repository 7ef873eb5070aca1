//! Gateway connection configuration
//!
//! A [`GatewayConfig`] is built once and handed to the client by value. It is
//! never mutated afterwards; the `with_*` setters consume and return `self`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_OPEN_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::errors::{DkError, DkResult};

/// Identity and credential fields that must be non-empty, in declaration order.
pub const REQUIRED_FIELDS: [&str; 7] =
    ["base_url", "api_key", "username", "password", "client_id", "client_secret", "source_app"];

/// Connection and credential parameters for one gateway client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway root, e.g. `https://gateway.example.bt`
    #[serde(default)]
    pub base_url: String,

    /// Value for the `X-gravitee-api-key` header
    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub client_id: String,

    #[serde(default)]
    pub client_secret: String,

    /// Application identifier sent as `source_app`
    #[serde(default)]
    pub source_app: String,

    /// Read timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_open_timeout_secs")]
    pub open_timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_open_timeout_secs() -> u64 {
    DEFAULT_OPEN_TIMEOUT_SECS
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            username: String::new(),
            password: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            source_app: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            open_timeout_secs: DEFAULT_OPEN_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Create an empty configuration with default timeouts
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = client_secret.into();
        self
    }

    pub fn with_source_app(mut self, source_app: impl Into<String>) -> Self {
        self.source_app = source_app.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_open_timeout_secs(mut self, secs: u64) -> Self {
        self.open_timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn open_timeout(&self) -> Duration {
        Duration::from_secs(self.open_timeout_secs)
    }

    fn required_values(&self) -> [&str; 7] {
        [
            &self.base_url,
            &self.api_key,
            &self.username,
            &self.password,
            &self.client_id,
            &self.client_secret,
            &self.source_app,
        ]
    }

    /// Names of required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .zip(self.required_values())
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fail with a `Configuration` error naming every missing field.
    pub fn validate(&self) -> DkResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(DkError::Configuration(format!(
            "Missing required configuration fields: {}",
            missing.join(", ")
        )))
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("client_id", &self.client_id)
            .field("client_secret", &redact(&self.client_secret))
            .field("source_app", &self.source_app)
            .field("timeout_secs", &self.timeout_secs)
            .field("open_timeout_secs", &self.open_timeout_secs)
            .finish()
    }
}
