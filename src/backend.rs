//! Backend layer — the seam between the client and whatever carries requests.
//!
//! The [`HttpBackend`] trait abstracts the channel that resolves one outgoing
//! [`Request`] into a [`Response`] or an error. Production backends would own
//! sockets; the crate's [`FakeBackend`](crate::testing::FakeBackend) resolves
//! everything in memory. The client never knows the difference.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::Result;
use crate::response::{Headers, Response};

// ── Request ──────────────────────────────────────────────────────────────────

/// A minimal description of one outgoing request.
///
/// Backends key their behavior on `path`; `method` and `body` travel along so
/// a backend that cares can inspect them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method, upper-case (`"GET"`, `"POST"`, ...).
    pub method: String,
    /// Request path, e.g. `"/users/42"`. Used verbatim as the stub lookup key.
    pub path: String,
    /// Request headers. The client merges its configured
    /// [`default_headers`](crate::config::ClientConfig::default_headers) in
    /// before sending; per-request values win on exact-name collision.
    pub headers: Headers,
    /// Optional raw request body.
    pub body: Option<Bytes>,
}

impl Request {
    /// Create a request with an explicit method and no body.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// A `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    /// A `POST` request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    /// A `PUT` request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new("PUT", path)
    }

    /// A `DELETE` request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new("DELETE", path)
    }

    /// Attach a header, replacing any existing entry with the same exact name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

// ── HttpBackend trait ────────────────────────────────────────────────────────

/// Abstraction over the channel that resolves requests.
///
/// Implementations must be `Send + Sync` so one backend can serve both
/// blocking and async call paths. `close()` defaults to a no-op because an
/// in-memory backend holds no connection to tear down.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Resolve one outgoing request into a response, or fail.
    async fn send(&self, request: &Request) -> Result<Response>;

    /// Release any held resources. No-op by default.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_constructor_sets_method_and_path() {
        let r = Request::get("/users");
        assert_eq!(r.method, "GET");
        assert_eq!(r.path, "/users");
        assert!(r.headers.is_empty());
        assert!(r.body.is_none());
    }

    #[test]
    fn with_header_attaches_and_replaces() {
        let r = Request::get("/users")
            .with_header("accept", "text/plain")
            .with_header("accept", "application/json");
        assert_eq!(r.headers.get("accept"), Some("application/json"));
        assert_eq!(r.headers.len(), 1);
    }

    #[test]
    fn with_body_attaches_payload() {
        let r = Request::post("/users").with_body(&br#"{"name":"a"}"#[..]);
        assert_eq!(r.method, "POST");
        assert_eq!(r.body.as_deref(), Some(&br#"{"name":"a"}"#[..]));
    }

    #[test]
    fn put_and_delete_constructors() {
        assert_eq!(Request::put("/x").method, "PUT");
        assert_eq!(Request::delete("/x").method, "DELETE");
    }
}
