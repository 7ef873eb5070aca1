//! Gateway transport: header assembly, sending and status mapping
//!
//! Every request carries `Content-Type: application/json` and the gateway API
//! key. Unless `skip_auth` is set it also carries the bearer token (when one
//! exists) and `source_app`. Caller headers are applied last and override the
//! defaults.

use dkpg_core::{CanonicalBody, SignatureHeaders};
use dkpg_domain::constants::{API_KEY_HEADER, SOURCE_APP_HEADER};
use dkpg_domain::{DkError, DkResult, FaultField, GatewayConfig, ResponseBody};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, instrument, warn};

use crate::errors::InfraError;
use crate::http::HttpClient;

const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Outbound body. The bytes in `Json` are sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Json(CanonicalBody),
    /// Already url-encoded
    Form(String),
}

/// A single request against the configured base URL.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub skip_auth: bool,
}

impl GatewayRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: RequestBody::Empty,
            query: Vec::new(),
            headers: Vec::new(),
            skip_auth: false,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Add a header that overrides any default of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach `DK-Signature`, `DK-Timestamp` and `DK-Nonce`.
    pub fn signature(self, signature: &SignatureHeaders) -> Self {
        signature.pairs().into_iter().fold(self, |request, (name, value)| request.header(name, value))
    }

    /// Omit the bearer token and `source_app` headers.
    pub fn skip_auth(mut self) -> Self {
        self.skip_auth = true;
        self
    }
}

fn header_value(name: &str, value: &str) -> DkResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| DkError::Configuration(format!("Invalid value for header {name}")))
}

/// Assemble request headers; later entries win.
pub fn build_headers(
    api_key: &str,
    source_app: &str,
    access_token: Option<&str>,
    custom: &[(String, String)],
    skip_auth: bool,
) -> DkResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(HeaderName::from_static("x-gravitee-api-key"), header_value(API_KEY_HEADER, api_key)?);

    if !skip_auth {
        if let Some(token) = access_token {
            headers.insert(AUTHORIZATION, header_value("Authorization", &format!("Bearer {token}"))?);
        }
        headers.insert(HeaderName::from_static("source_app"), header_value(SOURCE_APP_HEADER, source_app)?);
    }

    for (name, value) in custom {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| DkError::invalid_parameter(format!("Invalid header name: {name}")))?;
        headers.insert(header_name, header_value(name, value)?);
    }

    Ok(headers)
}

/// Map an HTTP status and decoded body onto the error taxonomy.
pub fn map_status(status: u16, body: ResponseBody) -> DkResult<ResponseBody> {
    match status {
        200..=299 => Ok(body),
        400..=499 => {
            let fault = body.fault();
            let message = fault
                .first_of(&[FaultField::Message, FaultField::Detail])
                .unwrap_or("Client error")
                .to_string();
            Err(DkError::InvalidParameter { message, fault })
        }
        500..=599 => {
            let fault = body.fault();
            let message = fault
                .first_of(&[FaultField::Description, FaultField::Message])
                .unwrap_or("Server error")
                .to_string();
            Err(DkError::api(message, fault))
        }
        other => Err(DkError::api(format!("Unexpected response status: {other}"), body.fault())),
    }
}

/// Sends requests for one configured gateway.
#[derive(Debug, Clone)]
pub struct Transport {
    http: HttpClient,
    base_url: String,
    api_key: String,
    source_app: String,
}

impl Transport {
    pub fn new(config: &GatewayConfig) -> DkResult<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout())
            .connect_timeout(config.open_timeout())
            .user_agent(concat!("dkpg-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            source_app: config.source_app.clone(),
        })
    }

    /// Send `request`, attaching `access_token` unless the request skips auth.
    #[instrument(skip(self, request, access_token), fields(method = %request.method, path = %request.path))]
    pub fn send(&self, request: GatewayRequest, access_token: Option<&str>) -> DkResult<ResponseBody> {
        let url = format!("{}{}", self.base_url, request.path);
        let headers = build_headers(
            &self.api_key,
            &self.source_app,
            access_token,
            &request.headers,
            request.skip_auth,
        )?;

        let mut builder = self.http.request(request.method, &url).headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.body(body.into_bytes()),
            RequestBody::Form(form) => builder.body(form),
        };

        let response = self.http.send(builder)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response.text().map_err(|err| DkError::from(InfraError::from(err)))?;

        let body = if (200..300).contains(&status) {
            ResponseBody::parse(content_type.as_deref(), text)?
        } else {
            ResponseBody::parse(content_type.as_deref(), text.clone())
                .unwrap_or(ResponseBody::Text(text))
        };

        match map_status(status, body) {
            Ok(body) => {
                debug!(status, "Gateway request succeeded");
                Ok(body)
            }
            Err(err) => {
                warn!(
                    status,
                    category = err.category().as_str(),
                    response_code = err.response_code().unwrap_or_default(),
                    "Gateway request failed"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn custom(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn test_default_headers_with_token() {
        let headers = build_headers("key-1", "SRC_AVS_0201", Some("tok"), &[], false).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["x-gravitee-api-key"], "key-1");
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
        assert_eq!(headers["source_app"], "SRC_AVS_0201");
    }

    #[test]
    fn test_no_bearer_without_token() {
        let headers = build_headers("key-1", "SRC_AVS_0201", None, &[], false).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers["source_app"], "SRC_AVS_0201");
    }

    #[test]
    fn test_skip_auth_omits_token_and_source_app() {
        let headers = build_headers("key-1", "SRC_AVS_0201", Some("tok"), &[], true).unwrap();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert!(headers.get("source_app").is_none());
        assert_eq!(headers["x-gravitee-api-key"], "key-1");
    }

    #[test]
    fn test_custom_headers_override_defaults() {
        let headers = build_headers(
            "key-1",
            "SRC_AVS_0201",
            None,
            &custom(&[("Content-Type", FORM_CONTENT_TYPE), ("DK-Nonce", "abc")]),
            true,
        )
        .unwrap();
        assert_eq!(headers[CONTENT_TYPE], FORM_CONTENT_TYPE);
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(headers["dk-nonce"], "abc");
    }

    #[test]
    fn test_bad_header_value_is_rejected() {
        let err = build_headers("key\n1", "SRC", None, &[], false).unwrap_err();
        assert!(matches!(err, DkError::Configuration(_)));
    }

    #[test]
    fn test_status_mapping() {
        let ok = map_status(200, ResponseBody::Text("fine".into())).unwrap();
        assert_eq!(ok.as_text(), Some("fine"));

        let not_found = map_status(
            404,
            ResponseBody::Json(json!({"response_code": "4004", "response_message": "not found"})),
        )
        .unwrap_err();
        assert!(matches!(not_found, DkError::InvalidParameter { .. }));
        assert_eq!(not_found.response_code(), Some("4004"));
        assert_eq!(not_found.message(), "not found");

        let server = map_status(500, ResponseBody::Json(json!({"response_description": "db down"})))
            .unwrap_err();
        assert!(matches!(server, DkError::Api { .. }));
        assert_eq!(server.response_description(), Some("db down"));
        assert_eq!(server.message(), "db down");

        let fallback = map_status(400, ResponseBody::Text(String::new())).unwrap_err();
        assert_eq!(fallback.message(), "Client error");
        let fallback = map_status(503, ResponseBody::Text(String::new())).unwrap_err();
        assert_eq!(fallback.message(), "Server error");

        let redirect = map_status(302, ResponseBody::Text(String::new())).unwrap_err();
        assert!(matches!(redirect, DkError::Api { .. }));
        assert_eq!(redirect.message(), "Unexpected response status: 302");
    }

    #[test]
    fn test_client_error_falls_back_to_detail() {
        let err = map_status(
            422,
            ResponseBody::Json(json!({"response_code": "4220", "response_detail": "amount invalid"})),
        )
        .unwrap_err();
        assert_eq!(err.message(), "amount invalid");
        assert_eq!(err.response_detail(), Some("amount invalid"));
    }
}
