//! Submission sink trait and implementations.
//!
//! The engine only produces a [`SubmissionPayload`]; what happens to it next
//! (logging, an HTTP call, a queue) belongs to a [`SubmissionSink`].

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::payload::SubmissionPayload;

/// Receives payloads from accepted submits.
///
/// Implementations must not fail; errors are logged and suppressed.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send + Sync {
    /// Hands over an accepted payload.
    fn submit(&self, payload: &SubmissionPayload);
}

/// A sink that discards every payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSubmissionSink;

impl SubmissionSink for NoOpSubmissionSink {
    fn submit(&self, _payload: &SubmissionPayload) {
        // Intentionally empty - discards all payloads
    }
}

/// A sink that logs each payload as pretty JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmissionSink;

impl SubmissionSink for LoggingSubmissionSink {
    fn submit(&self, payload: &SubmissionPayload) {
        match payload.to_json_pretty() {
            Ok(json) => info!(
                timestamp = %payload.timestamp,
                "Valid form data:\n{}", json
            ),
            Err(e) => warn!(error = %e, "Failed to render submission payload"),
        }
    }
}

/// A collecting sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingSubmissionSink {
    payloads: RwLock<Vec<SubmissionPayload>>,
}

impl CollectingSubmissionSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected payloads.
    #[must_use]
    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.read().clone()
    }

    /// Returns the number of collected payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.read().len()
    }

    /// Returns true if no payloads have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.read().is_empty()
    }

    /// Clears all collected payloads.
    pub fn clear(&self) {
        self.payloads.write().clear();
    }
}

impl SubmissionSink for CollectingSubmissionSink {
    fn submit(&self, payload: &SubmissionPayload) {
        self.payloads.write().push(payload.clone());
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for std::sync::Arc<S> {
    fn submit(&self, payload: &SubmissionPayload) {
        (**self).submit(payload);
    }
}
