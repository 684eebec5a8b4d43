//! End-to-end stubbing scenarios through the public `ApiClient` surface.
//!
//! These tests exercise the full path a test suite would use: wire a client to
//! a `FakeBackend`, queue behavior, issue requests, assert on outcomes and on
//! the recorded request log.

use std::sync::Arc;

use rest_client_sdk::testing::{
    DispatchOutcome, FakeBackend, ResponseFactory, configure_client_for_testing,
};
use rest_client_sdk::{ApiClient, ClientConfig, FaultKind, NetworkFault};
use serde_json::json;

fn test_client() -> ApiClient {
    let config = ClientConfig::builder()
        .base_url("https://api.example.com")
        .http_backend(Arc::new(FakeBackend::new()))
        .build();
    ApiClient::new(config).expect("valid config")
}

#[tokio::test]
async fn queued_json_response_round_trips() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_response("/users", ResponseFactory::ok(json!([{"id": 1}])));

    let response = client.get("/users").await.unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json_value().unwrap(), json!([{"id": 1}]));

    client.close().await.unwrap();
}

#[tokio::test]
async fn queued_timeout_raises_and_is_logged() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_error("/users", NetworkFault::timeout());

    let err = client.get("/users").await.unwrap_err();
    assert_eq!(err.fault_kind(), Some(FaultKind::Timeout));
    assert_eq!(err.to_string(), "Request timed out");

    let log = backend.requests();
    assert_eq!(log.len(), 1);
    assert!(log[0].is_fault());

    client.close().await.unwrap();
}

#[tokio::test]
async fn dns_failure_carries_hostname() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_error("/users", NetworkFault::dns_failure("api.example.com"));

    let err = client.get("/users").await.unwrap_err();
    assert_eq!(err.fault_kind(), Some(FaultKind::DnsFailure));
    assert!(err.to_string().contains("api.example.com"));
}

#[tokio::test]
async fn fault_takes_priority_then_response_follows() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_error("/resource", NetworkFault::timeout());
    backend.queue_response("/resource", ResponseFactory::ok(json!({"data": "value"})));

    let err = client.get("/resource").await.unwrap_err();
    assert_eq!(err.fault_kind(), Some(FaultKind::Timeout));

    let response = client.get("/resource").await.unwrap();
    assert_eq!(response.json_value().unwrap(), json!({"data": "value"}));
}

#[tokio::test]
async fn faults_and_response_consumed_in_order() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_error("/resource", NetworkFault::timeout());
    backend.queue_error("/resource", NetworkFault::connection_refused());
    backend.queue_response("/resource", ResponseFactory::ok(json!({"success": true})));

    assert_eq!(
        client.get("/resource").await.unwrap_err().fault_kind(),
        Some(FaultKind::Timeout)
    );
    assert_eq!(
        client.get("/resource").await.unwrap_err().fault_kind(),
        Some(FaultKind::ConnectionRefused)
    );

    let response = client.get("/resource").await.unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json_value().unwrap(), json!({"success": true}));

    assert_eq!(backend.request_count(), 3);
}

#[tokio::test]
async fn paths_do_not_share_queues() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_response("/a", ResponseFactory::empty(204));

    let err = client.get("/b").await.unwrap_err();
    assert!(err.is_unmatched());

    let response = client.get("/a").await.unwrap();
    assert_eq!(response.status_code(), 204);
}

#[tokio::test]
async fn unmatched_request_is_not_a_fault() {
    let mut client = test_client();
    let _backend = configure_client_for_testing(&mut client).unwrap();

    let err = client.get("/never-queued").await.unwrap_err();
    assert!(err.is_unmatched());
    assert!(!err.is_fault());
    assert!(err.to_string().contains("/never-queued"));
}

#[tokio::test]
async fn reset_disarms_queued_behavior() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_error("/resource", NetworkFault::connection_reset());
    backend.reset();

    let err = client.get("/resource").await.unwrap_err();
    assert!(err.is_unmatched());
}

#[tokio::test]
async fn request_log_records_every_dispatch_in_order() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_error("/a", NetworkFault::timeout());
    backend.queue_response("/b", ResponseFactory::created(json!({"id": 7})));

    let _ = client.get("/a").await;
    let _ = client.get("/b").await;
    let _ = client.get("/c").await;

    let log = backend.requests();
    let paths: Vec<&str> = log.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/a", "/b", "/c"]);
    assert_eq!(log[0].outcome.fault_kind(), Some(FaultKind::Timeout));
    assert_eq!(log[1].outcome, DispatchOutcome::Responded { status: 201 });
    assert_eq!(log[2].outcome, DispatchOutcome::Unmatched);
}

#[tokio::test]
async fn post_and_delete_resolve_by_path() {
    let mut client = test_client();
    let backend = configure_client_for_testing(&mut client).unwrap();

    backend.queue_response("/users", ResponseFactory::created(json!({"id": 1})));
    backend.queue_response("/users/1", ResponseFactory::empty(204));

    let created = client.post("/users", &br#"{"name":"a"}"#[..]).await.unwrap();
    assert_eq!(created.status_code(), 201);

    let deleted = client.delete("/users/1").await.unwrap();
    assert_eq!(deleted.status_code(), 204);
}

#[test]
fn dispatch_behaves_identically_off_the_runtime() {
    // Same FIFO + priority laws when driven synchronously, no runtime at all.
    let backend = FakeBackend::new();
    backend.queue_error("/resource", NetworkFault::timeout());
    backend.queue_response("/resource", ResponseFactory::ok(json!({"success": true})));

    assert_eq!(
        backend.dispatch("/resource").unwrap_err().fault_kind(),
        Some(FaultKind::Timeout)
    );
    assert_eq!(
        backend
            .dispatch("/resource")
            .unwrap()
            .json_value()
            .unwrap(),
        json!({"success": true})
    );
    assert_eq!(backend.request_count(), 2);
}
