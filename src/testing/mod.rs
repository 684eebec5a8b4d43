//! Testing utilities (behind the `testing` feature flag, on by default).
//!
//! Disable with:
//!
//! ```toml
//! [dependencies]
//! rest-client-sdk = { version = "*", default-features = false }
//! ```
//!
//! # Components
//!
//! - [`FakeBackend`] — In-memory stub registry implementing
//!   [`HttpBackend`](crate::backend::HttpBackend).
//! - [`ResponseFactory`] — Convenience constructors for common responses.
//! - [`configure_client_for_testing`] — Swap a client's backend for a fresh
//!   [`FakeBackend`].

pub mod fake_backend;
pub mod response_factory;

pub use fake_backend::{DispatchOutcome, FakeBackend, RequestRecord};
pub use response_factory::ResponseFactory;

use std::sync::Arc;

use crate::backend::HttpBackend;
use crate::client::ApiClient;
use crate::errors::Result;

/// Point `client` at a fresh [`FakeBackend`] and return the backend so the
/// test can queue responses and faults.
///
/// The client's existing configuration is kept, with only the `http_backend`
/// field replaced.
///
/// # Example
///
/// ```rust
/// use rest_client_sdk::testing::{configure_client_for_testing, FakeBackend, ResponseFactory};
/// use rest_client_sdk::{ApiClient, ClientConfig};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// # fn main() -> rest_client_sdk::Result<()> {
/// let config = ClientConfig::builder()
///     .base_url("https://api.example.com")
///     .http_backend(Arc::new(FakeBackend::new()))
///     .build();
/// let mut client = ApiClient::new(config)?;
///
/// let backend = configure_client_for_testing(&mut client)?;
/// backend.queue_response("/users", ResponseFactory::ok(json!([{"id": 1}])));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`Error::Config`](crate::errors::Error::Config) if the client's
/// current configuration no longer validates.
pub fn configure_client_for_testing(client: &mut ApiClient) -> Result<Arc<FakeBackend>> {
    let backend = Arc::new(FakeBackend::new());
    let mut config = client.config().clone();
    let as_backend: Arc<dyn HttpBackend> = backend.clone();
    config.http_backend = Some(as_backend);
    client.configure(config)?;
    Ok(backend)
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::errors::{FaultKind, NetworkFault};
    use serde_json::json;

    fn client_with_fake() -> ApiClient {
        let seed: Arc<dyn HttpBackend> = Arc::new(FakeBackend::new());
        let config = ClientConfig::builder()
            .base_url("https://api.example.com")
            .http_backend(seed)
            .build();
        ApiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn wiring_helper_returns_the_active_backend() {
        let mut client = client_with_fake();
        let backend = configure_client_for_testing(&mut client).unwrap();

        backend.queue_response("/users", ResponseFactory::ok(json!([{"id": 1}])));

        let response = client.get("/users").await.unwrap();
        assert_eq!(response.status_code(), 200);
        assert_eq!(backend.request_count(), 1);
    }

    #[tokio::test]
    async fn wiring_helper_replaces_previous_backend() {
        let mut client = client_with_fake();
        let first = configure_client_for_testing(&mut client).unwrap();
        let second = configure_client_for_testing(&mut client).unwrap();

        second.queue_response("/ping", ResponseFactory::empty(204));
        let response = client.get("/ping").await.unwrap();
        assert_eq!(response.status_code(), 204);

        // The first backend saw nothing.
        assert_eq!(first.request_count(), 0);
        assert_eq!(second.request_count(), 1);
    }

    #[tokio::test]
    async fn factory_arguments_infer_and_fault_priority_holds() {
        let mut client = client_with_fake();
        let backend = configure_client_for_testing(&mut client).unwrap();

        // Empty-array body queued first; the fault must still win the dispatch.
        backend.queue_response("/items", ResponseFactory::ok(json!([])));
        backend.queue_error("/items", NetworkFault::timeout());

        let err = client.get("/items").await.unwrap_err();
        assert_eq!(err.fault_kind(), Some(FaultKind::Timeout));

        let response = client.get("/items").await.unwrap();
        assert_eq!(response.json_value().unwrap(), json!([]));

        // Option-style factory arguments infer from both None and bare values.
        assert_eq!(ResponseFactory::not_found(None).status_code(), 404);
        assert_eq!(
            ResponseFactory::not_found("User not found")
                .json_value()
                .unwrap(),
            json!({"error": "User not found"})
        );
    }

    #[test]
    fn wiring_helper_keeps_base_url() {
        let mut client = client_with_fake();
        let _ = configure_client_for_testing(&mut client).unwrap();
        assert_eq!(client.config().base_url, "https://api.example.com");
    }
}
