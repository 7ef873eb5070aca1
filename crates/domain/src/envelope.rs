//! Response bodies and the gateway's JSON envelope
//!
//! Every gateway response is read into a [`ResponseBody`] first. Operation
//! wrappers then convert it into a typed [`ResponseEnvelope`]; bodies that do
//! not fit the envelope shape become `Parse` errors instead of being probed
//! field by field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::SUCCESS_CODE;
use crate::errors::{DkError, DkResult, GatewayFault};

/// Decoded HTTP response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Classify a raw body.
    ///
    /// A JSON content type that fails to parse is an error. Without one, a body
    /// that looks like a JSON document is parsed opportunistically and falls
    /// back to text.
    pub fn parse(content_type: Option<&str>, text: String) -> DkResult<Self> {
        let declared_json = content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));

        if declared_json {
            return serde_json::from_str(&text)
                .map(Self::Json)
                .map_err(|e| DkError::Parse(format!("Invalid JSON response body: {e}")));
        }

        let trimmed = text.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            if let Ok(value) = serde_json::from_str(&text) {
                return Ok(Self::Json(value));
            }
        }

        Ok(Self::Text(text))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Envelope error fields, if the body is a JSON object carrying any.
    pub fn fault(&self) -> GatewayFault {
        let Some(Value::Object(map)) = self.as_json() else {
            return GatewayFault::default();
        };
        let text = |key: &str| match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        GatewayFault {
            response_code: text("response_code"),
            response_message: text("response_message"),
            response_description: text("response_description"),
            response_detail: text("response_detail"),
        }
    }

    /// Convert into a typed envelope, failing with `Parse` when the shape does not fit.
    pub fn into_envelope<T: DeserializeOwned>(self) -> DkResult<ResponseEnvelope<T>> {
        match self {
            Self::Json(value @ Value::Object(_)) => serde_json::from_value(value)
                .map_err(|e| DkError::Parse(format!("Unexpected response envelope: {e}"))),
            Self::Json(_) => {
                Err(DkError::Parse("Unexpected response envelope: expected a JSON object".into()))
            }
            Self::Text(_) => {
                Err(DkError::Parse("Unexpected response envelope: body is not JSON".into()))
            }
        }
    }
}

/// Standard gateway envelope; `response_code == "0000"` means success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T = Value> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.response_code.as_deref() == Some(SUCCESS_CODE)
    }

    pub fn fault(&self) -> GatewayFault {
        GatewayFault {
            response_code: self.response_code.clone(),
            response_message: self.response_message.clone(),
            response_description: self.response_description.clone(),
            response_detail: self.response_detail.clone(),
        }
    }

    /// Take `response_data`, treating its absence as a malformed response.
    pub fn into_data(self) -> DkResult<T> {
        self.response_data
            .ok_or_else(|| DkError::Parse("Response envelope has no response_data".into()))
    }
}
