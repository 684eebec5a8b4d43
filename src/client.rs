//! The [`ApiClient`] — a thin front over a swappable [`HttpBackend`].
//!
//! The client owns no protocol logic: it validates configuration, joins paths
//! onto the base URL for diagnostics, and forwards every request to the
//! configured backend. Tests swap in a
//! [`FakeBackend`](crate::testing::FakeBackend) via
//! [`configure_client_for_testing`](crate::testing::configure_client_for_testing);
//! nothing in this module changes between the real and the fake path.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;

use crate::backend::{HttpBackend, Request};
use crate::config::ClientConfig;
use crate::errors::{Error, Result};
use crate::response::Response;

/// A stateful API client bound to one [`HttpBackend`].
///
/// # Lifecycle
///
/// 1. Create with [`ApiClient::new(config)`](ApiClient::new)
/// 2. Issue requests with [`request()`](ApiClient::request) or the
///    method shorthands
/// 3. Call [`close()`](ApiClient::close) to shut down cleanly — or just drop
///    the client; with an in-memory backend the two are equivalent
pub struct ApiClient {
    config: ClientConfig,
    backend: Arc<dyn HttpBackend>,
    closed: AtomicBool,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the config is invalid or carries no
    /// `http_backend`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let backend = config
            .http_backend
            .clone()
            .ok_or_else(|| Error::Config("no http_backend configured".into()))?;
        Ok(Self {
            config,
            backend,
            closed: AtomicBool::new(false),
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Re-apply a configuration, swapping the backend if it changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] under the same rules as [`new()`](Self::new);
    /// on error the previous configuration stays active.
    pub fn configure(&mut self, config: ClientConfig) -> Result<()> {
        config.validate()?;
        let backend = config
            .http_backend
            .clone()
            .ok_or_else(|| Error::Config("no http_backend configured".into()))?;
        tracing::debug!(base_url = %config.base_url, "reconfiguring client");
        self.config = config;
        self.backend = backend;
        Ok(())
    }

    /// Resolve one request against the backend.
    ///
    /// The config's `default_headers` are merged into the request before it
    /// reaches the backend; per-request headers win on exact-name collision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] after [`close()`](Self::close); otherwise
    /// whatever the backend returns, unmodified.
    pub async fn request(&self, request: &Request) -> Result<Response> {
        if self.closed.load(Ordering::Acquire) {
            return Err(Error::Closed);
        }
        tracing::debug!(method = %request.method, path = %request.path, "dispatching request");
        if self.config.default_headers.is_empty() {
            return self.backend.send(request).await;
        }
        let mut effective = request.clone();
        let mut headers = self.config.default_headers.clone();
        for (name, value) in request.headers.iter() {
            headers.insert(name, value);
        }
        effective.headers = headers;
        self.backend.send(&effective).await
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(&Request::get(path)).await
    }

    /// `POST path` with a raw body.
    pub async fn post(&self, path: &str, body: impl Into<Bytes>) -> Result<Response> {
        self.request(&Request::post(path).with_body(body)).await
    }

    /// `PUT path` with a raw body.
    pub async fn put(&self, path: &str, body: impl Into<Bytes>) -> Result<Response> {
        self.request(&Request::put(path).with_body(body)).await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request(&Request::delete(path)).await
    }

    /// Returns `true` once the client has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Close the client and the backend.
    ///
    /// Idempotent. Subsequent requests fail with [`Error::Closed`].
    pub async fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.backend.close().await
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
