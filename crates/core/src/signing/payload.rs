//! Per-request signing payload

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::canonical::CanonicalBody;
use crate::ids::random_hex;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const NONCE_BYTES: usize = 16;

/// Claims signed for one request. Built fresh per request and discarded after signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningPayload {
    /// Base64 of the canonical body
    pub data: String,
    pub timestamp: String,
    pub nonce: String,
}

impl SigningPayload {
    /// Payload with the current UTC time and a fresh nonce.
    pub fn new(body: &CanonicalBody) -> Self {
        Self::with_parts(body, generate_timestamp(), generate_nonce())
    }

    pub fn with_parts(
        body: &CanonicalBody,
        timestamp: impl Into<String>,
        nonce: impl Into<String>,
    ) -> Self {
        Self {
            data: STANDARD.encode(body.as_bytes()),
            timestamp: timestamp.into(),
            nonce: nonce.into(),
        }
    }
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn generate_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// 32 lowercase hex characters from 16 random bytes.
pub fn generate_nonce() -> String {
    random_hex(NONCE_BYTES)
}
