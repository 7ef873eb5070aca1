//! Error types used throughout the gateway client
//!
//! Every fallible operation returns [`DkResult`]. Failures are split into the
//! tiers callers branch on: local setup problems (`Configuration`,
//! `InvalidParameter`, `Signature`), transport failures (`Network`) and
//! gateway-side rejections (`Authentication`, `InvalidParameter`, `Api`,
//! `Transaction`). Gateway-side variants keep the envelope fields verbatim in a
//! [`GatewayFault`] so callers can branch on `response_code`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error fields echoed by the gateway's JSON envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayFault {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_detail: Option<String>,
}

/// Selector for one of the [`GatewayFault`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultField {
    Code,
    Message,
    Description,
    Detail,
}

impl GatewayFault {
    /// Fault carrying only a response code.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self { response_code: Some(code.into()), ..Self::default() }
    }

    /// Get a single field, treating empty strings as absent.
    pub fn field(&self, field: FaultField) -> Option<&str> {
        let value = match field {
            FaultField::Code => self.response_code.as_deref(),
            FaultField::Message => self.response_message.as_deref(),
            FaultField::Description => self.response_description.as_deref(),
            FaultField::Detail => self.response_detail.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// First populated field, probing in the given order.
    pub fn first_of(&self, order: &[FaultField]) -> Option<&str> {
        order.iter().find_map(|field| self.field(*field))
    }

    /// True when the gateway supplied none of the fields.
    pub fn is_empty(&self) -> bool {
        self.response_code.is_none()
            && self.response_message.is_none()
            && self.response_description.is_none()
            && self.response_detail.is_none()
    }
}

/// Coarse classification used for logging labels and caller retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    InvalidParameter,
    Signature,
    Network,
    Api,
    Transaction,
    Parse,
}

impl ErrorCategory {
    /// Stable label suitable for structured logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Authentication => "authentication",
            Self::InvalidParameter => "invalid_parameter",
            Self::Signature => "signature",
            Self::Network => "network",
            Self::Api => "api",
            Self::Transaction => "transaction",
            Self::Parse => "parse",
        }
    }
}

/// Main error type for the gateway client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DkError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {message}")]
    Authentication { message: String, fault: GatewayFault },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String, fault: GatewayFault },

    #[error("Signature error: {0}")]
    Signature(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {message}")]
    Api { message: String, fault: GatewayFault },

    #[error("Transaction error: {message}")]
    Transaction { message: String, fault: GatewayFault },

    #[error("Unexpected response: {0}")]
    Parse(String),
}

/// Result type alias for gateway client operations
pub type DkResult<T> = std::result::Result<T, DkError>;

impl DkError {
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication { message: message.into(), fault: GatewayFault::default() }
    }

    pub fn authentication_with(message: impl Into<String>, fault: GatewayFault) -> Self {
        Self::Authentication { message: message.into(), fault }
    }

    /// Locally detected parameter problem (no gateway involvement).
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter { message: message.into(), fault: GatewayFault::default() }
    }

    pub fn api(message: impl Into<String>, fault: GatewayFault) -> Self {
        Self::Api { message: message.into(), fault }
    }

    pub fn transaction(message: impl Into<String>, fault: GatewayFault) -> Self {
        Self::Transaction { message: message.into(), fault }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Authentication { .. } => ErrorCategory::Authentication,
            Self::InvalidParameter { .. } => ErrorCategory::InvalidParameter,
            Self::Signature(_) => ErrorCategory::Signature,
            Self::Network(_) => ErrorCategory::Network,
            Self::Api { .. } => ErrorCategory::Api,
            Self::Transaction { .. } => ErrorCategory::Transaction,
            Self::Parse(_) => ErrorCategory::Parse,
        }
    }

    /// Human readable message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(message)
            | Self::Signature(message)
            | Self::Network(message)
            | Self::Parse(message) => message,
            Self::Authentication { message, .. }
            | Self::InvalidParameter { message, .. }
            | Self::Api { message, .. }
            | Self::Transaction { message, .. } => message,
        }
    }

    /// Gateway envelope fields, when the failure came from the gateway.
    pub fn fault(&self) -> Option<&GatewayFault> {
        match self {
            Self::Authentication { fault, .. }
            | Self::InvalidParameter { fault, .. }
            | Self::Api { fault, .. }
            | Self::Transaction { fault, .. } => Some(fault),
            Self::Configuration(_) | Self::Signature(_) | Self::Network(_) | Self::Parse(_) => None,
        }
    }

    pub fn response_code(&self) -> Option<&str> {
        self.fault().and_then(|fault| fault.field(FaultField::Code))
    }

    pub fn response_message(&self) -> Option<&str> {
        self.fault().and_then(|fault| fault.field(FaultField::Message))
    }

    pub fn response_description(&self) -> Option<&str> {
        self.fault().and_then(|fault| fault.field(FaultField::Description))
    }

    pub fn response_detail(&self) -> Option<&str> {
        self.fault().and_then(|fault| fault.field(FaultField::Detail))
    }

    /// Whether a caller may reasonably retry the same call.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self.category(), ErrorCategory::Network | ErrorCategory::Api)
    }
}
