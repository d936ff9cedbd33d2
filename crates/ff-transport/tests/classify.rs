//! Outcome classification over a scripted HTTP port.

use std::sync::Arc;

use ff_test_utils::MockHttpClient;
use ff_transport::{wire, GraphqlClient, TransportError};
use ff_types::Attributes;
use serde_json::json;

fn client(mock: &MockHttpClient, server: &str, with_credentials: bool) -> GraphqlClient {
    GraphqlClient::new(Arc::new(mock.clone()), server, with_credentials)
}

#[tokio::test]
async fn success_passes_body_through() {
    let mock = MockHttpClient::new();
    mock.push_json(json!({ "data": { "createRecord": { "payload": { "id": "rec-1" } } } }));

    let response = client(&mock, "https://a.example/", true)
        .post(&wire::create_record("domain-1", &Attributes::new()))
        .await
        .unwrap();

    assert_eq!(wire::created_id(&response, "createRecord").as_deref(), Some("rec-1"));

    let request = mock.last_request().unwrap();
    assert_eq!(request.url, "https://a.example/api");
    assert_eq!(
        request.headers.get("Content-Type").map(String::as_str),
        Some("application/json;charset=UTF-8")
    );
}

#[tokio::test]
async fn non_200_status_is_a_transport_failure() {
    let mock = MockHttpClient::new();
    mock.push_status(204);

    let err = client(&mock, "https://a.example", true)
        .post(&wire::update_record("rec-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Status(204)));
}

#[tokio::test]
async fn malformed_body_is_a_parse_failure() {
    let mock = MockHttpClient::new();
    mock.push_body(200, "<html>not json</html>");

    let err = client(&mock, "https://a.example", true)
        .post(&wire::update_record("rec-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Parse(_)));
}

#[tokio::test]
async fn errors_array_surfaces_first_message() {
    let mock = MockHttpClient::new();
    mock.push_json(json!({
        "errors": [ { "message": "domain not found" }, { "message": "second" } ]
    }));

    let err = client(&mock, "https://a.example", true)
        .post(&wire::create_record("domain-1", &Attributes::new()))
        .await
        .unwrap_err();

    match err {
        TransportError::Api(message) => assert_eq!(message, "domain not found"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn network_failure_is_classified() {
    let mock = MockHttpClient::new();
    mock.push_network_error("connection refused");

    let err = client(&mock, "https://a.example", true)
        .post(&wire::update_record("rec-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Network(_)));
}

#[tokio::test]
async fn credentials_follow_the_policy_flag() {
    let mock = MockHttpClient::new();
    client(&mock, "https://a.example", true)
        .post(&wire::update_record("rec-1"))
        .await
        .unwrap();
    assert!(mock.last_request().unwrap().with_credentials);

    client(&mock, "https://a.example", false)
        .post(&wire::update_record("rec-1"))
        .await
        .unwrap();
    assert!(!mock.last_request().unwrap().with_credentials);
}

#[tokio::test]
async fn post_forget_swallows_failures() {
    let mock = MockHttpClient::new();
    mock.push_status(500);

    client(&mock, "https://a.example", true)
        .post_forget(&wire::update_record("rec-1"))
        .await;

    assert_eq!(mock.request_count(), 1);
}
