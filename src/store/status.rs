//! Per-concern request status.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Identifies one issued fetch so that superseded completions can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic request id allocator shared by every concern.
#[derive(Debug)]
pub struct RequestIds {
    next: AtomicU64,
}

impl RequestIds {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next(&self) -> RequestId {
        RequestId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RequestIds {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the independently tracked areas of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    Articles,
    Profile,
}

/// Status of the network work behind one concern.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "lowercase")]
pub enum Status {
    /// Nothing has been requested yet, or the last request was cancelled.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading(RequestId),
    /// The last completed operation succeeded.
    Succeeded,
    /// The last completed operation failed with this message.
    Failed(String),
}

impl Status {
    pub fn is_loading(&self) -> bool {
        matches!(self, Status::Loading(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed(_))
    }

    /// The last error message, if the concern is failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Status::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Status after a successful mutation. A running fetch stays loading;
    /// otherwise an earlier failure is cleared.
    pub fn after_mutation(in_flight: Option<RequestId>) -> Self {
        match in_flight {
            Some(request) => Status::Loading(request),
            None => Status::Succeeded,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading(_) => "loading",
            Status::Succeeded => "succeeded",
            Status::Failed(_) => "failed",
        }
    }
}
