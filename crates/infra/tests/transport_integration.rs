//! Integration tests for header assembly and HTTP status mapping

mod support;

use dkpg_core::canonical_json;
use dkpg_domain::{DkError, ErrorCategory, ResponseBody};
use dkpg_infra::RequestBody;
use serde_json::json;
use support::{header, MockGateway, ACCESS_TOKEN};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn request_without_token_omits_bearer() {
    let gateway = MockGateway::start();
    gateway.mount(
        Mock::given(method("GET"))
            .and(path("/v1/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong")),
    );

    let body = gateway.client().get("/v1/ping", &[]).unwrap();
    assert_eq!(body, ResponseBody::Text("pong".into()));

    let request = &gateway.requests_to("/v1/ping")[0];
    assert_eq!(header(request, "x-gravitee-api-key").as_deref(), Some("api-key"));
    assert_eq!(header(request, "content-type").as_deref(), Some("application/json"));
    assert!(header(request, "authorization").is_none());
    assert_eq!(header(request, "source_app").as_deref(), Some("SRC_AVS_0201"));
}

#[test]
fn get_sends_query_parameters() {
    let gateway = MockGateway::start();
    gateway.mount(
        Mock::given(method("GET"))
            .and(path("/v1/lookup"))
            .and(query_param("bank_code", "1060"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response_code": "0000"}))),
    );

    let body = gateway.client().get("/v1/lookup", &[("bank_code", "1060")]).unwrap();
    assert_eq!(body.as_json().unwrap()["response_code"], "0000");
}

#[test]
fn authenticated_post_sends_exact_body_and_custom_headers() {
    let gateway = MockGateway::start();
    let client = gateway.authenticated_client();
    gateway.mount(
        Mock::given(method("POST"))
            .and(path("/v1/echo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true}))),
    );

    let body = canonical_json(&json!({"b": 1, "a": "x"})).unwrap();
    client
        .post("/v1/echo", RequestBody::Json(body), &[("source_app", "OVERRIDE"), ("X-Trace", "t1")])
        .unwrap();

    let request = &gateway.requests_to("/v1/echo")[0];
    assert_eq!(request.body, br#"{"b":1,"a":"x"}"#);
    assert_eq!(header(request, "authorization"), Some(format!("Bearer {ACCESS_TOKEN}")));
    assert_eq!(header(request, "source_app").as_deref(), Some("OVERRIDE"));
    assert_eq!(header(request, "x-trace").as_deref(), Some("t1"));
}

#[test]
fn client_error_maps_to_invalid_parameter() {
    let gateway = MockGateway::start();
    gateway.mount(Mock::given(method("POST")).and(path("/v1/bad")).respond_with(
        ResponseTemplate::new(400).set_body_json(json!({
            "response_code": "4001",
            "response_detail": "bene_account_number is invalid"
        })),
    ));

    let err = gateway.client().post("/v1/bad", RequestBody::Empty, &[]).unwrap_err();
    assert!(matches!(err, DkError::InvalidParameter { .. }));
    assert_eq!(err.message(), "bene_account_number is invalid");
    assert_eq!(err.response_code(), Some("4001"));
    assert!(!err.is_retryable());
}

#[test]
fn server_error_maps_to_api_error() {
    let gateway = MockGateway::start();
    gateway.mount(Mock::given(method("POST")).and(path("/v1/down")).respond_with(
        ResponseTemplate::new(502).set_body_json(json!({
            "response_code": "5002",
            "response_message": "Upstream failure",
            "response_description": "Core banking unavailable"
        })),
    ));

    let err = gateway.client().post("/v1/down", RequestBody::Empty, &[]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Api);
    assert_eq!(err.message(), "Core banking unavailable");
    assert_eq!(err.response_message(), Some("Upstream failure"));
    assert!(err.is_retryable());
}

#[test]
fn non_json_error_body_uses_fallback_message() {
    let gateway = MockGateway::start();
    gateway.mount(
        Mock::given(method("POST"))
            .and(path("/v1/html"))
            .respond_with(ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>")),
    );

    let err = gateway.client().post("/v1/html", RequestBody::Empty, &[]).unwrap_err();
    assert_eq!(err.message(), "Server error");
    assert!(err.response_code().is_none());
}

#[test]
fn malformed_json_success_is_parse_error() {
    let gateway = MockGateway::start();
    gateway.mount(
        Mock::given(method("POST")).and(path("/v1/broken")).respond_with(
            ResponseTemplate::new(200).set_body_raw("{\"response_code\":", "application/json"),
        ),
    );

    let err = gateway.client().post("/v1/broken", RequestBody::Empty, &[]).unwrap_err();
    assert!(matches!(err, DkError::Parse(_)));
}
