//! Bookkeeping for the asynchronous generation request that produces graphs.
//!
//! The backend call itself lives with the host. This module only tracks which
//! request is current so that a slow, superseded response can never overwrite
//! the result of a newer one.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Identifies one issued request. Ids increase monotonically per tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(u64);

impl RequestId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of the most recent request.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation<T> {
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Generation<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Generation::Loading)
    }
}

#[derive(Debug, Clone)]
pub struct RequestTracker<T> {
    latest: Option<RequestId>,
    next: u64,
    state: Generation<T>,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self {
            latest: None,
            next: 1,
            state: Generation::Idle,
        }
    }
}

impl<T> RequestTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new request id and enters `Loading`. Earlier ids become stale.
    pub fn begin(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next += 1;
        self.latest = Some(id);
        self.state = Generation::Loading;
        debug!(request = %id, "generation request started");
        id
    }

    /// Records the outcome of request `id`.
    ///
    /// Returns false, leaving the state untouched, when `id` is not the latest
    /// request or the latest one was already resolved.
    pub fn resolve(&mut self, id: RequestId, result: Result<T, String>) -> bool {
        if self.latest() != Some(id) || !self.state.is_loading() {
            warn!(request = %id, latest = ?self.latest, "discarding stale generation result");
            return false;
        }
        self.state = match result {
            Ok(value) => Generation::Ready(value),
            Err(message) => {
                warn!(request = %id, %message, "generation failed");
                Generation::Failed(message)
            }
        };
        true
    }

    pub fn state(&self) -> &Generation<T> {
        &self.state
    }

    pub fn latest(&self) -> Option<RequestId> {
        self.latest
    }

    /// Moves a ready value out, leaving the tracker `Idle`.
    pub fn take_ready(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.state, Generation::Idle) {
            Generation::Ready(value) => Some(value),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Returns to `Idle`. Any outstanding request becomes stale.
    pub fn clear(&mut self) {
        self.latest = None;
        self.state = Generation::Idle;
    }
}
