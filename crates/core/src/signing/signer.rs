//! RS256 request signer

use std::fmt;

use dkpg_domain::constants::{NONCE_HEADER, SIGNATURE_HEADER, SIGNATURE_SCHEME, TIMESTAMP_HEADER};
use dkpg_domain::{DkError, DkResult};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use tracing::debug;

use super::canonical::{canonical_json, CanonicalBody};
use super::payload::SigningPayload;

/// The three headers attached to every signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeaders {
    /// `DKSignature <jwt>`
    pub signature: String,
    pub timestamp: String,
    pub nonce: String,
}

impl SignatureHeaders {
    /// Signed token without the scheme tag.
    pub fn token(&self) -> &str {
        self.signature
            .strip_prefix(SIGNATURE_SCHEME)
            .map_or(self.signature.as_str(), str::trim_start)
    }

    /// `(header name, value)` pairs in transmission order.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (SIGNATURE_HEADER, self.signature.as_str()),
            (TIMESTAMP_HEADER, self.timestamp.as_str()),
            (NONCE_HEADER, self.nonce.as_str()),
        ]
    }
}

/// Signs request bodies with a session's RSA private key.
#[derive(Clone)]
pub struct RequestSigner {
    key: EncodingKey,
}

impl RequestSigner {
    /// Parse a PEM encoded RSA private key (PKCS#1 or PKCS#8).
    pub fn from_pem(pem: &str) -> DkResult<Self> {
        let key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| DkError::Signature(format!("Invalid private key: {e}")))?;
        Ok(Self { key })
    }

    /// Canonicalize and sign `body` with a fresh timestamp and nonce.
    pub fn sign<T: Serialize + ?Sized>(&self, body: &T) -> DkResult<SignatureHeaders> {
        let canonical = canonical_json(body)?;
        self.sign_body(&canonical)
    }

    pub fn sign_body(&self, body: &CanonicalBody) -> DkResult<SignatureHeaders> {
        self.sign_payload(&SigningPayload::new(body))
    }

    /// Sign an already assembled payload.
    pub fn sign_payload(&self, payload: &SigningPayload) -> DkResult<SignatureHeaders> {
        let token = encode(&Header::new(Algorithm::RS256), payload, &self.key)
            .map_err(|e| DkError::Signature(format!("Failed to generate signature: {e}")))?;

        debug!(timestamp = %payload.timestamp, nonce = %payload.nonce, "Signed request payload");

        Ok(SignatureHeaders {
            signature: format!("{SIGNATURE_SCHEME} {token}"),
            timestamp: payload.timestamp.clone(),
            nonce: payload.nonce.clone(),
        })
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner").field("key", &"<redacted>").finish()
    }
}

/// Sign `body` with `private_key` in one step.
pub fn sign<T: Serialize + ?Sized>(private_key: &str, body: &T) -> DkResult<SignatureHeaders> {
    RequestSigner::from_pem(private_key)?.sign(body)
}
