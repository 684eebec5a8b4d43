#![warn(missing_docs)]
//! # rest-client-sdk
//!
//! Async REST API client with a deterministic, in-memory test double.
//!
//! The client itself is deliberately thin: every request flows through the
//! [`HttpBackend`] trait, and the crate ships a [`FakeBackend`] implementation
//! of that trait so tests can pre-program responses and simulated network
//! faults per path — FIFO per queue, faults before responses, full isolation
//! between paths — without any socket, DNS, or timer behavior.
//!
//! ## Quick start
//!
//! ```rust
//! use rest_client_sdk::testing::{configure_client_for_testing, FakeBackend, ResponseFactory};
//! use rest_client_sdk::{ApiClient, ClientConfig, NetworkFault};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> rest_client_sdk::Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://api.example.com")
//!         .http_backend(Arc::new(FakeBackend::new()))
//!         .build();
//!     let mut client = ApiClient::new(config)?;
//!     let backend = configure_client_for_testing(&mut client)?;
//!
//!     // First call times out, the retry succeeds.
//!     backend.queue_error("/users", NetworkFault::timeout());
//!     backend.queue_response("/users", ResponseFactory::ok(json!([{"id": 1}])));
//!
//!     assert!(client.get("/users").await.is_err());
//!     let users = client.get("/users").await?;
//!     assert_eq!(users.status_code(), 200);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `testing` (default) | [`FakeBackend`], [`ResponseFactory`] and the wiring helper |
//!
//! [`FakeBackend`]: testing::FakeBackend
//! [`ResponseFactory`]: testing::ResponseFactory

pub mod backend;
pub mod client;
pub mod config;
pub mod errors;
pub mod response;

#[cfg(feature = "testing")]
pub mod testing;

// ── Top-level re-exports ────────────────────────────────────────────────────

// Core
pub use client::ApiClient;
pub use config::ClientConfig;
pub use errors::{Error, FaultKind, NetworkFault, Result};

// Transport seam
pub use backend::{HttpBackend, Request};

// Values
pub use response::{Headers, Response};
