//! Gateway client: owns the configuration, transport and session
//!
//! One client per merchant configuration. Operation wrappers borrow the client
//! through the [`GatewayTransport`] port and sign with the session key.

use dkpg_core::{
    CanonicalBody, GatewayTransport, IntraTransaction, PullPayment, QrPayment, SignatureHeaders,
    TransactionStatus,
};
use dkpg_domain::{DkResult, GatewayConfig, ResponseBody, Session};
use parking_lot::{Mutex, RwLock};
use tracing::{info, instrument};

use super::auth::Authenticator;
use super::transport::{GatewayRequest, RequestBody, Transport};

/// Client for the DK payment gateway
pub struct GatewayClient {
    config: GatewayConfig,
    transport: Transport,
    session: RwLock<Session>,
    auth_lock: Mutex<()>,
}

impl GatewayClient {
    /// Create a client for `config`
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming every missing required field,
    /// before any network activity.
    pub fn new(config: GatewayConfig) -> DkResult<Self> {
        config.validate()?;
        let transport = Transport::new(&config)?;

        Ok(Self {
            config,
            transport,
            session: RwLock::new(Session::new()),
            auth_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.read().access_token().map(str::to_owned)
    }

    pub fn has_private_key(&self) -> bool {
        self.session.read().has_private_key()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Fetch a token, store it, then fetch and store the signing key.
    ///
    /// Concurrent calls are serialized. If the key step fails the new token
    /// stays on the session without a key.
    #[instrument(skip(self), fields(source_app = %self.config.source_app))]
    pub fn authenticate(&self) -> DkResult<&Self> {
        let _guard = self.auth_lock.lock();
        self.store_token()?;
        self.store_private_key()?;
        info!("Gateway session authenticated");
        Ok(self)
    }

    /// Fetch and store only the access token.
    pub fn fetch_token(&self) -> DkResult<String> {
        let _guard = self.auth_lock.lock();
        self.store_token()
    }

    /// Fetch and store the signing key using the stored token.
    pub fn fetch_private_key(&self) -> DkResult<String> {
        let _guard = self.auth_lock.lock();
        self.store_private_key()
    }

    fn authenticator(&self) -> Authenticator<'_> {
        Authenticator::new(&self.transport, &self.config)
    }

    fn store_token(&self) -> DkResult<String> {
        let token = self.authenticator().fetch_token()?;
        self.session.write().set_access_token(token.clone());
        Ok(token)
    }

    fn store_private_key(&self) -> DkResult<String> {
        let token = self.access_token();
        let pem = self.authenticator().fetch_private_key(token.as_deref())?;
        self.session.write().set_private_key(pem.clone());
        Ok(pem)
    }

    /// Send a request with the session token attached.
    pub fn send(&self, request: GatewayRequest) -> DkResult<ResponseBody> {
        let token = self.access_token();
        self.transport.send(request, token.as_deref())
    }

    /// POST `body` with extra headers applied over the defaults.
    pub fn post(
        &self,
        path: &str,
        body: RequestBody,
        headers: &[(&str, &str)],
    ) -> DkResult<ResponseBody> {
        let request = headers
            .iter()
            .fold(GatewayRequest::post(path).body(body), |request, (name, value)| {
                request.header(*name, *value)
            });
        self.send(request)
    }

    /// GET with query parameters.
    pub fn get(&self, path: &str, params: &[(&str, &str)]) -> DkResult<ResponseBody> {
        let request = params
            .iter()
            .fold(GatewayRequest::get(path), |request, (name, value)| request.query(*name, *value));
        self.send(request)
    }

    pub fn pull_payment(&self) -> PullPayment<'_, Self> {
        PullPayment::new(self)
    }

    pub fn intra_transaction(&self) -> IntraTransaction<'_, Self> {
        IntraTransaction::new(self)
    }

    pub fn qr_payment(&self) -> QrPayment<'_, Self> {
        QrPayment::new(self)
    }

    pub fn transaction_status(&self) -> TransactionStatus<'_, Self> {
        TransactionStatus::new(self)
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("config", &self.config)
            .field("session", &*self.session.read())
            .finish_non_exhaustive()
    }
}

impl GatewayTransport for GatewayClient {
    fn source_app(&self) -> &str {
        &self.config.source_app
    }

    fn private_key(&self) -> Option<String> {
        self.session.read().private_key().map(str::to_owned)
    }

    fn post_signed(
        &self,
        path: &str,
        body: CanonicalBody,
        headers: SignatureHeaders,
    ) -> DkResult<ResponseBody> {
        self.send(GatewayRequest::post(path).body(RequestBody::Json(body)).signature(&headers))
    }
}
