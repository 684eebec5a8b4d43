//! Client configuration — [`ClientConfig`] with typed builder pattern.
//!
//! [`ClientConfig`] carries everything the client needs to issue requests.
//! It uses [`typed_builder`] so the required `base_url` must be supplied at
//! compile time while optional fields default sensibly.
//!
//! # Example
//!
//! ```rust
//! use rest_client_sdk::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .base_url("https://api.example.com")
//!     .build();
//! ```

use std::sync::Arc;

use typed_builder::TypedBuilder;

use crate::backend::HttpBackend;
use crate::errors::{Error, Result};
use crate::response::Headers;

/// Configuration for an [`ApiClient`](crate::client::ApiClient).
///
/// Use [`ClientConfig::builder()`] to construct. The `http_backend` field is
/// the replaceable transport seam: swapping it and re-applying the config via
/// [`configure`](crate::client::ApiClient::configure) redirects every
/// subsequent request.
#[derive(Clone, TypedBuilder)]
pub struct ClientConfig {
    // ── Required ─────────────────────────────────────────────────────────
    /// Base URL of the API, e.g. `"https://api.example.com"`.
    #[builder(setter(into))]
    pub base_url: String,

    // ── Transport ────────────────────────────────────────────────────────
    /// The backend that resolves requests. `None` until one is supplied —
    /// [`ApiClient::new`](crate::client::ApiClient::new) rejects a config
    /// without a backend.
    #[builder(default, setter(strip_option))]
    pub http_backend: Option<Arc<dyn HttpBackend>>,

    // ── Headers ──────────────────────────────────────────────────────────
    /// Headers attached to every outgoing request.
    #[builder(default)]
    pub default_headers: Headers,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("has_backend", &self.http_backend.is_some())
            .field("default_headers", &self.default_headers.len())
            .finish()
    }
}

impl ClientConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is empty.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".into()));
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
