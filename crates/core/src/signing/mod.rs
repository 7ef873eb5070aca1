//! Request canonicalization and signing
//!
//! Signing runs per request: canonicalize the body, base64 it, wrap it with a
//! fresh timestamp and nonce, sign the result as an RS256 JWT and emit the
//! `DK-Signature`, `DK-Timestamp` and `DK-Nonce` headers. Every failure along
//! the way is a `Signature` error; partial headers are never returned.

pub mod canonical;
pub mod payload;
pub mod signer;

pub use canonical::{canonical_json, CanonicalBody};
pub use payload::{format_timestamp, generate_nonce, generate_timestamp, SigningPayload};
pub use signer::{sign, RequestSigner, SignatureHeaders};
