//! # DKPG Domain
//!
//! Pure data types for the DK payment gateway client.
//!
//! This crate contains:
//! - The `DkError` taxonomy and `GatewayFault` envelope fields
//! - `GatewayConfig` and the per-client `Session`
//! - Operation request structs with pure validation
//! - The response envelope and typed response data
//! - STAN, format and reference-table helpers
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O

pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod session;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items
pub use config::{GatewayConfig, REQUIRED_FIELDS};
pub use envelope::{ResponseBody, ResponseEnvelope};
pub use errors::{DkError, DkResult, ErrorCategory, FaultField, GatewayFault};
pub use session::Session;
pub use types::*;
pub use validation::{Violation, ViolationKind};
