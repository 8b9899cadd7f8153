//! Binds an engine to the collaborator that receives accepted payloads.

use tracing::debug;

use super::{EventOutcome, FormEvent};
use crate::display::FieldDisplay;
use crate::engine::ValidationEngine;
use crate::errors::Result;
use crate::submission::SubmissionSink;

/// Routes events to an engine and hands accepted payloads to a sink.
pub struct FormController<D, S> {
    engine: ValidationEngine<D>,
    sink: S,
}

impl<D: FieldDisplay, S: SubmissionSink> FormController<D, S> {
    /// Creates a controller.
    #[must_use]
    pub const fn new(engine: ValidationEngine<D>, sink: S) -> Self {
        Self { engine, sink }
    }

    /// The wrapped engine.
    #[must_use]
    pub const fn engine(&self) -> &ValidationEngine<D> {
        &self.engine
    }

    /// The submission sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Handles `event`, forwarding the payload of an accepted submit.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<EventOutcome> {
        let outcome = self.engine.handle(event)?;
        if let Some(payload) = outcome.payload() {
            debug!("Forwarding payload to submission sink");
            self.sink.submit(payload);
        }
        Ok(outcome)
    }

    /// Unwraps the controller.
    pub fn into_parts(self) -> (ValidationEngine<D>, S) {
        (self.engine, self.sink)
    }
}
