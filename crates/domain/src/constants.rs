//! Gateway constants
//!
//! Endpoint paths, header names and envelope codes shared by every layer.

// Envelope codes
pub const SUCCESS_CODE: &str = "0000";
pub const KEY_NOT_FOUND_CODE: &str = "3001";

// Header names
pub const API_KEY_HEADER: &str = "X-gravitee-api-key";
pub const SOURCE_APP_HEADER: &str = "source_app";
pub const SIGNATURE_HEADER: &str = "DK-Signature";
pub const TIMESTAMP_HEADER: &str = "DK-Timestamp";
pub const NONCE_HEADER: &str = "DK-Nonce";

/// Scheme tag placed in front of the signed token in `DK-Signature`.
pub const SIGNATURE_SCHEME: &str = "DKSignature";

// Token request
pub const GRANT_TYPE: &str = "password";
pub const TOKEN_SCOPES: &str = "keys:read";

// Timeouts (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OPEN_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_REQUEST_ID_PREFIX: &str = "REQ";
pub const DEFAULT_PAYMENT_TYPE: &str = "INTRA";

/// Endpoint paths relative to the configured base URL.
pub mod paths {
    pub const TOKEN: &str = "/v1/auth/token";
    pub const PRIVATE_KEY: &str = "/v1/sign/key";
    pub const PULL_PAYMENT_AUTHORIZE: &str = "/v1/account_auth/pull-payment";
    pub const PULL_PAYMENT_DEBIT: &str = "/v1/debit_request/pull-payment";
    pub const ACCOUNT_INQUIRY: &str = "/v1/beneficiary/account_inquiry";
    pub const FUND_TRANSFER: &str = "/v1/initiate/transaction";
    pub const GENERATE_QR: &str = "/v1/generate_qr";
    pub const STATUS_CURRENT_DAY: &str = "/v1/transaction/status";
    pub const STATUS_PREVIOUS_DAYS: &str = "/v1/transactions/status";
}
