//! Convenience constructors for common stub responses.

use bytes::Bytes;
use serde::Serialize;
use serde_json::{Value, json};

use crate::errors::Result;
use crate::response::{Headers, Response};

/// Factory for common HTTP responses.
///
/// Simplifies programming a [`FakeBackend`](crate::testing::FakeBackend) by
/// covering the usual status codes and body shapes.
///
/// # Example
///
/// ```rust
/// use rest_client_sdk::testing::{FakeBackend, ResponseFactory};
/// use serde_json::json;
///
/// let backend = FakeBackend::new();
/// backend.queue_response("/users", ResponseFactory::json(&json!([{"id": 1}]), 200).unwrap());
/// backend.queue_response("/users/99", ResponseFactory::not_found(None));
/// ```
pub struct ResponseFactory;

impl ResponseFactory {
    /// A JSON response: `data` serialized as the body, with a
    /// `content-type: application/json` header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::errors::Error::Json) immediately if
    /// `data` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(data: &T, status: u16) -> Result<Response> {
        Self::json_with_headers(data, status, Headers::new())
    }

    /// Like [`json`](Self::json), with extra headers merged over the default.
    /// Caller-supplied values win on exact-name collision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::errors::Error::Json) if `data` cannot be
    /// serialized.
    pub fn json_with_headers<T: Serialize + ?Sized>(
        data: &T,
        status: u16,
        headers: Headers,
    ) -> Result<Response> {
        let content = serde_json::to_vec(data)?;
        let mut merged = Headers::new();
        merged.insert("content-type", "application/json");
        for (name, value) in headers.iter() {
            merged.insert(name, value);
        }
        Ok(Response::new(status, merged, content))
    }

    /// A plain-text response with a `content-type: text/plain` header.
    #[must_use]
    pub fn text(body: &str, status: u16) -> Response {
        Self::text_with_headers(body, status, Headers::new())
    }

    /// Like [`text`](Self::text), with extra headers merged over the default.
    /// Caller-supplied values win on exact-name collision.
    #[must_use]
    pub fn text_with_headers(body: &str, status: u16, headers: Headers) -> Response {
        let mut merged = Headers::new();
        merged.insert("content-type", "text/plain");
        for (name, value) in headers.iter() {
            merged.insert(name, value);
        }
        Response::new(status, merged, body.as_bytes().to_vec())
    }

    /// An empty response: zero-length body, no headers. Pass `204` for the
    /// classic no-content case.
    #[must_use]
    pub fn empty(status: u16) -> Response {
        Response::new(status, Headers::new(), Bytes::new())
    }

    /// `200 OK`, empty when `data` is `None`, JSON otherwise.
    ///
    /// Only `None` means "no body": `ok(json!([]))` produces a literal empty
    /// JSON array body. Callers wanting other statuses use
    /// [`json`](Self::json) directly.
    #[must_use]
    pub fn ok(data: impl Into<Option<Value>>) -> Response {
        Self::status_or_empty(200, data.into())
    }

    /// `201 Created`, empty when `data` is `None`, JSON otherwise.
    #[must_use]
    pub fn created(data: impl Into<Option<Value>>) -> Response {
        Self::status_or_empty(201, data.into())
    }

    /// `202 Accepted`, empty when `data` is `None`, JSON otherwise.
    #[must_use]
    pub fn accepted(data: impl Into<Option<Value>>) -> Response {
        Self::status_or_empty(202, data.into())
    }

    /// `400 Bad Request` with body `{"error": message}`.
    #[must_use]
    pub fn bad_request<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(400, message.into().unwrap_or("Bad Request"))
    }

    /// `401 Unauthorized` with body `{"error": message}`.
    #[must_use]
    pub fn unauthorized<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(401, message.into().unwrap_or("Unauthorized"))
    }

    /// `403 Forbidden` with body `{"error": message}`.
    #[must_use]
    pub fn forbidden<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(403, message.into().unwrap_or("Forbidden"))
    }

    /// `404 Not Found` with body `{"error": message}`.
    #[must_use]
    pub fn not_found<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(404, message.into().unwrap_or("Not Found"))
    }

    /// `409 Conflict` with body `{"error": message}`.
    #[must_use]
    pub fn conflict<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(409, message.into().unwrap_or("Conflict"))
    }

    /// `422 Unprocessable Entity`, with an `"errors"` key holding the
    /// validation errors when `errors` is `Some`.
    #[must_use]
    pub fn unprocessable_entity(errors: impl Into<Option<Value>>) -> Response {
        let mut body = json!({"error": "Unprocessable Entity"});
        if let Some(errors) = errors.into() {
            body["errors"] = errors;
        }
        Self::json(&body, 422).expect("serialize")
    }

    /// `500 Internal Server Error` with body `{"error": message}`.
    #[must_use]
    pub fn server_error<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(500, message.into().unwrap_or("Internal Server Error"))
    }

    /// `503 Service Unavailable` with body `{"error": message}`.
    #[must_use]
    pub fn service_unavailable<'a>(message: impl Into<Option<&'a str>>) -> Response {
        Self::error_json(503, message.into().unwrap_or("Service Unavailable"))
    }

    fn status_or_empty(status: u16, data: Option<Value>) -> Response {
        match data {
            None => Self::empty(status),
            Some(value) => Self::json(&value, status).expect("serialize"),
        }
    }

    fn error_json(status: u16, message: &str) -> Response {
        Self::json(&json!({"error": message}), status).expect("serialize")
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
