//! Port interfaces for the gateway transport
//!
//! Operation wrappers are written against [`GatewayTransport`] so they can be
//! exercised without HTTP. The infra crate's `GatewayClient` is the production
//! implementation.

use dkpg_domain::{DkResult, ResponseBody};

use crate::signing::{CanonicalBody, SignatureHeaders};

/// Trait for sending signed requests on an authenticated session
pub trait GatewayTransport: Send + Sync {
    /// Configured source application identifier
    fn source_app(&self) -> &str;

    /// Session private key (PEM), present once authenticated
    fn private_key(&self) -> Option<String>;

    /// POST a signed body. `body` must be the exact bytes `headers` were computed over.
    fn post_signed(
        &self,
        path: &str,
        body: CanonicalBody,
        headers: SignatureHeaders,
    ) -> DkResult<ResponseBody>;
}
