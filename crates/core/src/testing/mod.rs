//! Test support: RSA fixtures and a recording transport
//!
//! Available to this crate's tests and, through the `test-utils` feature, to
//! downstream crates.

use std::collections::VecDeque;

use dkpg_domain::{DkError, DkResult, ResponseBody};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use parking_lot::Mutex;

use crate::ports::GatewayTransport;
use crate::signing::{CanonicalBody, SignatureHeaders, SigningPayload};

/// 2048-bit PKCS#1 key the fake gateway hands out.
pub const GATEWAY_PRIVATE_KEY: &str = include_str!("fixtures/gateway_key.pem");
pub const GATEWAY_PUBLIC_KEY: &str = include_str!("fixtures/gateway_key.pub.pem");

/// Unrelated key pair for negative verification tests.
pub const OTHER_PRIVATE_KEY: &str = include_str!("fixtures/other_key.pem");
pub const OTHER_PUBLIC_KEY: &str = include_str!("fixtures/other_key.pub.pem");

pub const TEST_SOURCE_APP: &str = "SRC_AVS_0201";

/// Verify `DK-Signature` against a public key and return the signed claims.
pub fn verify_signature(headers: &SignatureHeaders, public_pem: &str) -> DkResult<SigningPayload> {
    let key = DecodingKey::from_rsa_pem(public_pem.as_bytes())
        .map_err(|e| DkError::Signature(format!("Invalid public key: {e}")))?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    let data = decode::<SigningPayload>(headers.token(), &key, &validation)
        .map_err(|e| DkError::Signature(format!("Signature verification failed: {e}")))?;
    Ok(data.claims)
}

/// A signed call captured by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub body: CanonicalBody,
    pub headers: SignatureHeaders,
}

/// In-memory [`GatewayTransport`] that records calls and replays queued responses.
#[derive(Debug)]
pub struct RecordingTransport {
    source_app: String,
    private_key: Option<String>,
    responses: Mutex<VecDeque<DkResult<ResponseBody>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTransport {
    /// Authenticated transport using [`GATEWAY_PRIVATE_KEY`].
    pub fn new() -> Self {
        Self {
            source_app: TEST_SOURCE_APP.to_string(),
            private_key: Some(GATEWAY_PRIVATE_KEY.to_string()),
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Transport whose session has no private key.
    pub fn unauthenticated() -> Self {
        Self { private_key: None, ..Self::new() }
    }

    pub fn with_source_app(mut self, source_app: impl Into<String>) -> Self {
        self.source_app = source_app.into();
        self
    }

    pub fn with_private_key(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(pem.into());
        self
    }

    /// Queue a response body for the next call.
    pub fn respond_with(self, body: ResponseBody) -> Self {
        self.responses.lock().push_back(Ok(body));
        self
    }

    /// Queue a JSON response body for the next call.
    pub fn respond_with_json(self, value: serde_json::Value) -> Self {
        self.respond_with(ResponseBody::Json(value))
    }

    /// Queue a transport failure for the next call.
    pub fn fail_with(self, error: DkError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Most recent call, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().last().cloned()
    }
}

impl GatewayTransport for RecordingTransport {
    fn source_app(&self) -> &str {
        &self.source_app
    }

    fn private_key(&self) -> Option<String> {
        self.private_key.clone()
    }

    fn post_signed(
        &self,
        path: &str,
        body: CanonicalBody,
        headers: SignatureHeaders,
    ) -> DkResult<ResponseBody> {
        self.calls.lock().push(RecordedCall { path: path.to_string(), body, headers });
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(DkError::Network("no canned response queued".into())))
    }
}
