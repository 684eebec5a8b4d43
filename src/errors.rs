//! Error types for the rest-client-sdk.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an alias
//! for `std::result::Result<T, Error>`.
//!
//! Simulated transport failures are modelled as a single [`NetworkFault`] value
//! carrying a closed [`FaultKind`] enum, rather than one native error type per
//! failure mode. Call sites can match exhaustively on the kind.

// ── Fault values ─────────────────────────────────────────────────────────────

/// The closed set of transport-level failure modes a test can simulate.
///
/// A fault occurs *before* any HTTP response is received. An HTTP error
/// response (e.g. 500) is a successful transport exchange and is modelled as a
/// plain [`Response`](crate::response::Response) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The request exceeded its deadline.
    Timeout,
    /// The server actively refused the connection.
    ConnectionRefused,
    /// The connection was reset mid-request.
    ConnectionReset,
    /// The hostname could not be resolved.
    DnsFailure,
}

/// A simulated transport fault: a [`FaultKind`] plus a human-readable message.
///
/// "Timeout" here is a label on the value, not an elapsed-time simulation —
/// raising one never blocks or waits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct NetworkFault {
    /// Which failure mode this fault simulates.
    pub kind: FaultKind,
    /// Human-readable description, surfaced verbatim to the caller.
    pub message: String,
}

impl NetworkFault {
    /// Create a fault with an explicit kind and message.
    ///
    /// This is the message-override path; the named constructors below carry
    /// the conventional default messages.
    #[must_use]
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Simulate a request timeout.
    #[must_use]
    pub fn timeout() -> Self {
        Self::new(FaultKind::Timeout, "Request timed out")
    }

    /// Simulate a connection refused by the server.
    #[must_use]
    pub fn connection_refused() -> Self {
        Self::new(FaultKind::ConnectionRefused, "Connection refused")
    }

    /// Simulate a connection reset during the request.
    #[must_use]
    pub fn connection_reset() -> Self {
        Self::new(FaultKind::ConnectionReset, "Connection reset by peer")
    }

    /// Simulate a DNS resolution failure for `host`.
    #[must_use]
    pub fn dns_failure(host: &str) -> Self {
        Self::new(
            FaultKind::DnsFailure,
            format!("Failed to resolve hostname: {host}"),
        )
    }
}

// ── Error ────────────────────────────────────────────────────────────────────

/// All errors that can be produced by this crate.
///
/// Callers should include a wildcard arm when matching — future versions may
/// add variants.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A simulated transport fault, raised verbatim as queued by the test.
    #[error(transparent)]
    Fault(#[from] NetworkFault),

    /// The test double has no queued response or fault for this path.
    ///
    /// This is a test-authoring error (forgot to queue), deliberately distinct
    /// from [`Error::Fault`] so a misconfigured test never reads as "the
    /// production code saw a network error".
    #[error("no stubbed response or fault for path {path:?}")]
    UnmatchedRequest {
        /// The path that was dispatched without any programmed behavior.
        path: String,
    },

    /// Transparent wrapper around [`serde_json::Error`].
    ///
    /// Raised when a body fails to serialize at construction time, or fails to
    /// parse in [`Response::json()`](crate::response::Response::json).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response body was not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A configuration value is absent or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A request was issued after [`close()`](crate::client::ApiClient::close).
    #[error("Client is closed")]
    Closed,
}

/// Convenience alias so callers can write `Result<T>` instead of
/// `std::result::Result<T, rest_client_sdk::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

// ── Helpers ──────────────────────────────────────────────────────────────────

impl Error {
    /// Returns `true` if this error is a simulated transport fault.
    #[inline]
    #[must_use]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// The [`FaultKind`] if this error is a simulated fault, else `None`.
    #[inline]
    #[must_use]
    pub fn fault_kind(&self) -> Option<FaultKind> {
        match self {
            Self::Fault(fault) => Some(fault.kind),
            _ => None,
        }
    }

    /// Returns `true` if this error means the double had nothing queued for
    /// the dispatched path.
    #[inline]
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        matches!(self, Self::UnmatchedRequest { .. })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
