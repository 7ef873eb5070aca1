//! Per-client authentication state

use std::fmt;

/// Bearer token and signing key obtained by the two-step authenticate flow.
///
/// Both fields start absent. The token is always set before the key.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    private_key: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// PEM encoded RSA private key
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Token and key are both present.
    pub fn is_authenticated(&self) -> bool {
        self.has_access_token() && self.has_private_key()
    }

    /// Store a new token. Any key fetched under the previous token is dropped.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = Some(token.into());
        self.private_key = None;
    }

    pub fn set_private_key(&mut self, pem: impl Into<String>) {
        self.private_key = Some(pem.into());
    }

    pub fn clear(&mut self) {
        self.access_token = None;
        self.private_key = None;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
