//! The [`Response`] value type — a fabricated HTTP response.
//!
//! A `Response` is immutable once constructed: fields are private and only
//! accessors are exposed. The body is a [`Bytes`] buffer, so cloning a
//! response is cheap and handing one to multiple call sites never copies the
//! payload.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::errors::Result;

// ── Headers ──────────────────────────────────────────────────────────────────

/// An ordered header map.
///
/// Insertion order is preserved and names are matched exactly as written —
/// no case folding. This mirrors what the stub registry hands back: whatever
/// the test queued, byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Create an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header, replacing any existing entry with the same exact name.
    ///
    /// A replaced header keeps its original position; new names append.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a header value by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no headers are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl std::ops::Index<&str> for Headers {
    type Output = str;

    /// Panics if the header is absent. Intended for test assertions; use
    /// [`get`](Self::get) in fallible code.
    fn index(&self, name: &str) -> &str {
        self.get(name)
            .unwrap_or_else(|| panic!("no header named {name:?}"))
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// An immutable fabricated HTTP response: status code, headers, raw body.
///
/// Constructed directly or via
/// [`ResponseFactory`](crate::testing::ResponseFactory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status_code: u16,
    headers: Headers,
    content: Bytes,
}

impl Response {
    /// Create a response from its parts.
    #[must_use]
    pub fn new(status_code: u16, headers: Headers, content: impl Into<Bytes>) -> Self {
        Self {
            status_code,
            headers,
            content: content.into(),
        }
    }

    /// The HTTP status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The response headers, in insertion order.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The raw body bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The body decoded as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Utf8`](crate::errors::Error::Utf8) if the body is not
    /// valid UTF-8.
    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.content.to_vec())?)
    }

    /// The body parsed as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::errors::Error::Json) if the body is not
    /// valid JSON for `T` — e.g. calling `json()` on a response built by
    /// [`ResponseFactory::text`](crate::testing::ResponseFactory::text).
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.content)?)
    }

    /// The body parsed as an untyped [`serde_json::Value`].
    ///
    /// # Errors
    ///
    /// Same as [`json()`](Self::json).
    pub fn json_value(&self) -> Result<serde_json::Value> {
        self.json()
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
