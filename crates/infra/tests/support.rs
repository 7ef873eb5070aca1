//! Shared helpers for gateway integration tests.
//!
//! Wiremock needs a tokio runtime; the blocking client must run outside it.
//! [`MockGateway`] owns both and exposes synchronous helpers.

#![allow(dead_code)]

use dkpg_core::testing::{GATEWAY_PRIVATE_KEY, TEST_SOURCE_APP};
use dkpg_core::SignatureHeaders;
use dkpg_domain::constants::{paths, NONCE_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use dkpg_domain::GatewayConfig;
use dkpg_infra::GatewayClient;
use serde_json::json;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "test-access-token";

/// Mock gateway server driven from synchronous tests.
pub struct MockGateway {
    server: MockServer,
    rt: Runtime,
}

impl MockGateway {
    pub fn start() -> Self {
        init_tracing();
        let rt = Runtime::new().expect("tokio runtime should start");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    /// Drop mounted mocks and recorded requests.
    pub fn reset(&self) {
        self.rt.block_on(self.server.reset());
    }

    /// Token and key endpoints that succeed.
    pub fn mount_auth(&self) {
        self.mount(
            Mock::given(method("POST")).and(path(paths::TOKEN)).respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "response_code": "0000",
                    "response_message": "Success",
                    "response_data": {"access_token": ACCESS_TOKEN, "token_type": "Bearer"}
                })),
            ),
        );
        self.mount(
            Mock::given(method("POST"))
                .and(path(paths::PRIVATE_KEY))
                .respond_with(ResponseTemplate::new(200).set_body_string(GATEWAY_PRIVATE_KEY)),
        );
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt.block_on(self.server.received_requests()).unwrap_or_default()
    }

    /// Requests received for `request_path`, in arrival order.
    pub fn requests_to(&self, request_path: &str) -> Vec<Request> {
        self.requests().into_iter().filter(|r| r.url.path() == request_path).collect()
    }

    pub fn config(&self) -> GatewayConfig {
        GatewayConfig::new()
            .with_base_url(self.uri())
            .with_api_key("api-key")
            .with_username("merchant")
            .with_password("p@ss word")
            .with_client_id("client")
            .with_client_secret("client-secret")
            .with_source_app(TEST_SOURCE_APP)
            .with_timeout_secs(5)
            .with_open_timeout_secs(2)
    }

    pub fn client(&self) -> GatewayClient {
        GatewayClient::new(self.config()).expect("client should build")
    }

    /// Client that has completed the authentication flow.
    pub fn authenticated_client(&self) -> GatewayClient {
        self.mount_auth();
        let client = self.client();
        client.authenticate().expect("authentication should succeed");
        client
    }
}

/// Route client logs to the test harness; set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn header(request: &Request, name: &str) -> Option<String> {
    request.headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

/// Signature headers as received by the gateway.
pub fn signature_headers(request: &Request) -> SignatureHeaders {
    SignatureHeaders {
        signature: header(request, SIGNATURE_HEADER).expect("DK-Signature header"),
        timestamp: header(request, TIMESTAMP_HEADER).expect("DK-Timestamp header"),
        nonce: header(request, NONCE_HEADER).expect("DK-Nonce header"),
    }
}
