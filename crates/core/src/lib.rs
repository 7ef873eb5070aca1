//! # DKPG Core
//!
//! Signing and operation logic for the DK payment gateway client.
//!
//! This crate contains:
//! - Canonical JSON encoding and RS256 request signing
//! - Request id, timestamp and nonce generation
//! - The `GatewayTransport` port
//! - Payment operation wrappers written against that port
//!
//! ## Architecture Principles
//! - Only depends on `dkpg-domain`
//! - No HTTP or session state
//! - All transport access via the `GatewayTransport` trait

pub mod ids;
pub mod operations;
pub mod ports;
pub mod signing;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use ids::{auth_request_id, generate_request_id, request_id};
pub use operations::{
    decode_qr_image, save_qr_image, IntraTransaction, PullPayment, QrPayment, TransactionStatus,
};
pub use ports::GatewayTransport;
pub use signing::{
    canonical_json, sign, CanonicalBody, RequestSigner, SignatureHeaders, SigningPayload,
};
