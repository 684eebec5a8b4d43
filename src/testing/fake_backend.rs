//! In-memory fake HTTP backend for deterministic client testing.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{HttpBackend, Request};
use crate::errors::{Error, FaultKind, NetworkFault, Result};
use crate::response::Response;

// ── Request log ──────────────────────────────────────────────────────────────

/// How one dispatched request was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A queued response was returned.
    Responded {
        /// Status code of the returned response.
        status: u16,
    },
    /// A queued fault was raised.
    Faulted {
        /// The fault that was raised, as queued.
        fault: NetworkFault,
    },
    /// Nothing was queued for the path; the dispatch failed with
    /// [`Error::UnmatchedRequest`].
    Unmatched,
}

impl DispatchOutcome {
    /// The fault kind, when this outcome raised a fault.
    #[must_use]
    pub fn fault_kind(&self) -> Option<FaultKind> {
        match self {
            Self::Faulted { fault } => Some(fault.kind),
            _ => None,
        }
    }
}

/// One entry in the backend's chronological request log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// The path that was dispatched.
    pub path: String,
    /// How the dispatch resolved.
    pub outcome: DispatchOutcome,
}

impl RequestRecord {
    /// Returns `true` if this dispatch raised a queued fault.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        matches!(self.outcome, DispatchOutcome::Faulted { .. })
    }
}

// ── FakeBackend ──────────────────────────────────────────────────────────────

/// An in-memory, synchronised stub registry implementing [`HttpBackend`].
///
/// Per path, the backend holds a FIFO queue of pending [`NetworkFault`]s and a
/// FIFO queue of pending [`Response`]s. Dispatching a request consumes the
/// front of the fault queue first; only when no fault is pending does a queued
/// response get returned. A path with nothing queued fails with
/// [`Error::UnmatchedRequest`].
///
/// Every dispatch — responded, faulted, or unmatched — appends exactly one
/// [`RequestRecord`], so tests can assert on the fact and order of calls.
///
/// One instance is meant for exclusive use within one test: construct it (or
/// let [`configure_client_for_testing`](crate::testing::configure_client_for_testing)
/// do it), queue behavior, exercise the client, drop it at teardown.
pub struct FakeBackend {
    response_queues: Mutex<HashMap<String, VecDeque<Response>>>,
    error_queues: Mutex<HashMap<String, VecDeque<NetworkFault>>>,
    requests: Mutex<Vec<RequestRecord>>,
}

impl std::fmt::Debug for FakeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let responses = self.response_queues.lock().expect("lock");
        let errors = self.error_queues.lock().expect("lock");
        let requests = self.requests.lock().expect("lock");
        f.debug_struct("FakeBackend")
            .field("paths_with_responses", &responses.len())
            .field("paths_with_errors", &errors.len())
            .field("requests_served", &requests.len())
            .finish()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeBackend {
    /// Create an empty [`FakeBackend`] with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            response_queues: Mutex::new(HashMap::new()),
            error_queues: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Append a response to the FIFO queue for `path`.
    pub fn queue_response(&self, path: impl Into<String>, response: Response) {
        self.response_queues
            .lock()
            .expect("lock")
            .entry(path.into())
            .or_default()
            .push_back(response);
    }

    /// Append a fault to the FIFO queue for `path`.
    pub fn queue_error(&self, path: impl Into<String>, fault: NetworkFault) {
        self.error_queues
            .lock()
            .expect("lock")
            .entry(path.into())
            .or_default()
            .push_back(fault);
    }

    /// Resolve one request against the queued state.
    ///
    /// Synchronous and non-blocking — the async [`HttpBackend::send`] impl
    /// delegates here without awaiting, so the behavior is identical from
    /// blocking and suspendable call paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fault`] when a fault is queued for `path` (the
    /// response queue is left untouched), or [`Error::UnmatchedRequest`] when
    /// nothing is queued.
    pub fn dispatch(&self, path: &str) -> Result<Response> {
        if let Some(fault) = pop_front(&self.error_queues, path) {
            tracing::debug!(path, kind = ?fault.kind, "dispatching queued fault");
            self.record(
                path,
                DispatchOutcome::Faulted {
                    fault: fault.clone(),
                },
            );
            return Err(Error::Fault(fault));
        }
        if let Some(response) = pop_front(&self.response_queues, path) {
            tracing::debug!(path, status = response.status_code(), "dispatching queued response");
            self.record(
                path,
                DispatchOutcome::Responded {
                    status: response.status_code(),
                },
            );
            return Ok(response);
        }
        self.record(path, DispatchOutcome::Unmatched);
        Err(Error::UnmatchedRequest {
            path: path.to_owned(),
        })
    }

    /// Clear both queue maps. The request log is left intact; call
    /// [`clear_requests`](Self::clear_requests) separately to drop it.
    pub fn reset(&self) {
        self.response_queues.lock().expect("lock").clear();
        self.error_queues.lock().expect("lock").clear();
    }

    /// Drop the request log.
    pub fn clear_requests(&self) {
        self.requests.lock().expect("lock").clear();
    }

    /// Snapshot of the chronological request log.
    #[must_use]
    pub fn requests(&self) -> Vec<RequestRecord> {
        self.requests.lock().expect("lock").clone()
    }

    /// Number of dispatches served so far, faulted or not.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("lock").len()
    }

    /// Number of responses still queued for `path`.
    ///
    /// An absent path and a drained queue both report zero.
    #[must_use]
    pub fn pending_responses(&self, path: &str) -> usize {
        queue_len(&self.response_queues, path)
    }

    /// Number of faults still queued for `path`.
    #[must_use]
    pub fn pending_errors(&self, path: &str) -> usize {
        queue_len(&self.error_queues, path)
    }

    fn record(&self, path: &str, outcome: DispatchOutcome) {
        self.requests.lock().expect("lock").push(RequestRecord {
            path: path.to_owned(),
            outcome,
        });
    }
}

/// Pop the front of the queue for `path`, dropping the map entry once drained
/// so an emptied queue is indistinguishable from an absent path.
fn pop_front<T>(map: &Mutex<HashMap<String, VecDeque<T>>>, path: &str) -> Option<T> {
    let mut guard = map.lock().expect("lock");
    let queue = guard.get_mut(path)?;
    let item = queue.pop_front();
    if queue.is_empty() {
        guard.remove(path);
    }
    item
}

fn queue_len<T>(map: &Mutex<HashMap<String, VecDeque<T>>>, path: &str) -> usize {
    map.lock()
        .expect("lock")
        .get(path)
        .map_or(0, VecDeque::len)
}

#[async_trait]
impl HttpBackend for FakeBackend {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.dispatch(&request.path)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
