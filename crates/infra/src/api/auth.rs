//! Two-step gateway authentication
//!
//! The token request is an unsigned url-encoded form. The private-key request
//! needs the bearer token from the first step and answers with a PEM block as
//! plain text.

use dkpg_core::{auth_request_id, canonical_json};
use dkpg_domain::constants::{paths, GRANT_TYPE, KEY_NOT_FOUND_CODE, TOKEN_SCOPES};
use dkpg_domain::{DkError, DkResult, FaultField, GatewayConfig, GatewayFault, ResponseBody};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};
use url::form_urlencoded;

use super::transport::{GatewayRequest, RequestBody, Transport, FORM_CONTENT_TYPE};

const PEM_MARKERS: [&str; 2] = ["BEGIN RSA PRIVATE KEY", "BEGIN PRIVATE KEY"];
const TOKEN_MESSAGE_ORDER: [FaultField; 2] = [FaultField::Detail, FaultField::Message];

#[derive(Serialize)]
struct KeyRequestBody<'a> {
    request_id: &'a str,
    source_app: &'a str,
}

/// Runs the token and private-key requests. Holds no session state.
pub struct Authenticator<'a> {
    transport: &'a Transport,
    config: &'a GatewayConfig,
}

impl<'a> Authenticator<'a> {
    pub fn new(transport: &'a Transport, config: &'a GatewayConfig) -> Self {
        Self { transport, config }
    }

    /// Request an access token with the configured credentials.
    #[instrument(skip_all, fields(source_app = %self.config.source_app))]
    pub fn fetch_token(&self) -> DkResult<String> {
        let request_id = auth_request_id();
        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &self.config.username)
            .append_pair("password", &self.config.password)
            .append_pair("client_id", &self.config.client_id)
            .append_pair("client_secret", &self.config.client_secret)
            .append_pair("grant_type", GRANT_TYPE)
            .append_pair("scopes", TOKEN_SCOPES)
            .append_pair("source_app", &self.config.source_app)
            .append_pair("request_id", &request_id)
            .finish();

        let request = GatewayRequest::post(paths::TOKEN)
            .body(RequestBody::Form(form))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .skip_auth();

        let body = self.transport.send(request, None).map_err(token_failure)?;
        let token = token_from_body(body)?;
        info!(request_id = %request_id, "Access token obtained");
        Ok(token)
    }

    /// Request the signing key; `access_token` must come from [`Self::fetch_token`].
    #[instrument(skip_all, fields(source_app = %self.config.source_app))]
    pub fn fetch_private_key(&self, access_token: Option<&str>) -> DkResult<String> {
        let Some(token) = access_token.filter(|token| !token.is_empty()) else {
            return Err(DkError::authentication("Access token required to fetch private key"));
        };

        let request_id = auth_request_id();
        let body = canonical_json(&KeyRequestBody {
            request_id: &request_id,
            source_app: &self.config.source_app,
        })
        .map_err(key_failure)?;

        let request = GatewayRequest::post(paths::PRIVATE_KEY).body(RequestBody::Json(body));
        let response = self.transport.send(request, Some(token)).map_err(key_failure)?;
        let pem = private_key_from_body(response)?;
        info!(request_id = %request_id, "Private key obtained");
        Ok(pem)
    }
}

fn token_failure(err: DkError) -> DkError {
    match err {
        DkError::Network(_) => err,
        other => {
            let fault = other.fault().cloned().unwrap_or_default();
            warn!(category = other.category().as_str(), "Token request rejected");
            DkError::authentication_with(format!("Token request failed: {}", other.message()), fault)
        }
    }
}

fn key_failure(err: DkError) -> DkError {
    match err {
        DkError::Network(_) => err,
        other => {
            let fault = other.fault().cloned().unwrap_or_default();
            warn!(category = other.category().as_str(), "Private key request rejected");
            if fault.field(FaultField::Code) == Some(KEY_NOT_FOUND_CODE) {
                return key_not_found(fault);
            }
            DkError::authentication_with(
                format!("Failed to fetch private key: {}", other.message()),
                fault,
            )
        }
    }
}

fn key_not_found(fault: GatewayFault) -> DkError {
    let detail = fault
        .first_of(&[FaultField::Detail, FaultField::Message])
        .unwrap_or("Unknown error")
        .to_string();
    DkError::authentication_with(format!("Private key not found: {detail}"), fault)
}

/// Extract the access token from a 2xx token response.
pub(crate) fn token_from_body(body: ResponseBody) -> DkResult<String> {
    let fault = body.fault();
    let envelope = match body.into_envelope::<Value>() {
        Ok(envelope) if envelope.is_success() => envelope,
        _ => {
            let detail = fault.first_of(&TOKEN_MESSAGE_ORDER).unwrap_or("Unknown error");
            return Err(DkError::authentication_with(
                format!("Token request failed: {detail}"),
                fault,
            ));
        }
    };

    envelope
        .response_data
        .as_ref()
        .and_then(|data| data.get("access_token"))
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| DkError::authentication_with("No access token in response", fault))
}

/// Accept a PEM private key, verbatim, from a 2xx key response.
pub(crate) fn private_key_from_body(body: ResponseBody) -> DkResult<String> {
    let is_pem = |text: &str| PEM_MARKERS.iter().any(|marker| text.contains(marker));

    match body {
        ResponseBody::Text(text) if is_pem(&text) => Ok(text),
        ResponseBody::Json(Value::String(text)) if is_pem(&text) => Ok(text),
        other => {
            let fault = other.fault();
            if fault.field(FaultField::Code) == Some(KEY_NOT_FOUND_CODE) {
                Err(key_not_found(fault))
            } else {
                Err(DkError::authentication_with("Invalid private key response", fault))
            }
        }
    }
}
