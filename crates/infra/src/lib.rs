//! # DKPG Infrastructure
//!
//! Impure adapters for the DK payment gateway client.
//!
//! This crate contains:
//! - Blocking HTTP client with connect/read timeouts
//! - Gateway transport (header assembly, status mapping)
//! - Two-step authentication and the session-owning `GatewayClient`
//! - Configuration loading from the environment, `.env` and files
//!
//! ## Architecture
//! - Implements the `GatewayTransport` port defined in `dkpg-core`
//! - Depends on `dkpg-domain` and `dkpg-core`
//! - Contains all I/O

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{Authenticator, GatewayClient, GatewayRequest, RequestBody, Transport};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
