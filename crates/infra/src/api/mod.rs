//! Gateway HTTP API
//!
//! - `transport`: header assembly, request sending and HTTP status mapping
//! - `auth`: token and private-key acquisition
//! - `client`: session owner and production [`dkpg_core::GatewayTransport`]
//!
//! Requests are synchronous, one attempt each, bounded by the configured
//! connect and read timeouts. Retrying is left to callers.

pub mod auth;
pub mod client;
pub mod transport;

pub use auth::Authenticator;
pub use client::GatewayClient;
pub use transport::{build_headers, map_status, GatewayRequest, RequestBody, Transport};
