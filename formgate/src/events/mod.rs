//! Event routing.
//!
//! Maps UI events onto engine operations:
//!
//! | Event | Action |
//! |---|---|
//! | focus lost on a text or select field | validate that field |
//! | input on a field showing an error | store value, re-validate |
//! | input on a field without a visible error | store value only |
//! | choice changed | store selection, validate immediately |
//! | submit | full validation; payload and reset on success |
//!
//! The engine never navigates, so a submit event never needs its default
//! action to run.

mod controller;

pub use controller::FormController;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{FieldId, FieldKind, FieldValue};
use crate::display::FieldDisplay;
use crate::engine::ValidationEngine;
use crate::errors::Result;
use crate::payload::SubmissionPayload;
use crate::utils::{now_utc, Timestamp};

/// An event raised by the form's controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// The value of a control changed while typing.
    Input {
        /// Field that changed.
        field: FieldId,
        /// The new raw value.
        value: FieldValue,
    },
    /// A control lost focus.
    Blur {
        /// Field that lost focus.
        field: FieldId,
    },
    /// A selection changed on a radio group.
    ChoiceChanged {
        /// Field whose selection changed.
        field: FieldId,
        /// The newly selected option.
        value: Option<String>,
    },
    /// The user attempted to submit the form.
    Submit,
}

impl FormEvent {
    /// Creates an input event carrying text.
    #[must_use]
    pub fn input(field: FieldId, value: impl Into<FieldValue>) -> Self {
        Self::Input {
            field,
            value: value.into(),
        }
    }

    /// Creates a blur event.
    #[must_use]
    pub const fn blur(field: FieldId) -> Self {
        Self::Blur { field }
    }

    /// Creates a choice change event selecting `option`.
    #[must_use]
    pub fn choose(field: FieldId, option: impl Into<String>) -> Self {
        Self::ChoiceChanged {
            field,
            value: Some(option.into()),
        }
    }
}

/// What handling an event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event triggers nothing for this field.
    Ignored,
    /// The raw value was stored without validating.
    Updated {
        /// Field that was updated.
        field: FieldId,
    },
    /// A single field was validated.
    Validated {
        /// Field that was validated.
        field: FieldId,
        /// Outcome of the validation.
        valid: bool,
    },
    /// The form was valid; here is the payload. Every field has been reset.
    Submitted(SubmissionPayload),
    /// The form was invalid; errors are displayed per field.
    Rejected {
        /// Fields that failed, in form order.
        invalid: Vec<FieldId>,
    },
}

impl EventOutcome {
    /// The payload of an accepted submit.
    #[must_use]
    pub const fn payload(&self) -> Option<&SubmissionPayload> {
        match self {
            Self::Submitted(payload) => Some(payload),
            _ => None,
        }
    }
}

impl<D: FieldDisplay> ValidationEngine<D> {
    /// Applies the triggering rules to `event`.
    ///
    /// Fails only when an event carries a value of the wrong shape for its field.
    pub fn handle(&mut self, event: FormEvent) -> Result<EventOutcome> {
        self.handle_at(event, now_utc())
    }

    /// Like [`handle`](Self::handle), stamping any payload with `timestamp`.
    pub fn handle_at(&mut self, event: FormEvent, timestamp: Timestamp) -> Result<EventOutcome> {
        let outcome = match event {
            FormEvent::Blur { field } => {
                if field.kind() == FieldKind::Choice {
                    EventOutcome::Ignored
                } else {
                    let valid = self.validate_field(field);
                    EventOutcome::Validated { field, valid }
                }
            }
            FormEvent::Input { field, value } => {
                self.set_value(field, value)?;
                if self.error_visible(field) {
                    let valid = self.validate_field(field);
                    EventOutcome::Validated { field, valid }
                } else {
                    EventOutcome::Updated { field }
                }
            }
            FormEvent::ChoiceChanged { field, value } => {
                self.set_value(field, FieldValue::Choice(value))?;
                let valid = self.validate_field(field);
                EventOutcome::Validated { field, valid }
            }
            FormEvent::Submit => match self.submit_at(timestamp) {
                Some(payload) => EventOutcome::Submitted(payload),
                None => EventOutcome::Rejected {
                    invalid: self.invalid_fields(),
                },
            },
        };
        debug!(outcome = ?outcome, "Event handled");
        Ok(outcome)
    }
}
