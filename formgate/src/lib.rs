//! # Formgate
//!
//! Field-by-field validation for a contact form, with live feedback.
//!
//! Formgate provides:
//!
//! - **Pure validators**: one rule per field, a function of the supplied value
//! - **An immutable validator set**: built once, injected into the engine
//! - **Display handles**: an explicit field-to-display mapping, so the engine
//!   never touches a UI toolkit directly
//! - **Event routing**: blur, input, choice and submit events mapped to
//!   validations
//! - **Submission payloads**: a flat snapshot produced only by a valid submit
//!
//! ## Quick Start
//!
//! ```rust
//! use formgate::prelude::*;
//!
//! let mut engine = ValidationEngine::headless(&RuleConfig::default());
//!
//! engine.handle(FormEvent::input(FieldId::FullName, "Al")).unwrap();
//! engine.handle(FormEvent::blur(FieldId::FullName)).unwrap();
//! assert!(engine.error_visible(FieldId::FullName));
//!
//! let outcome = engine.handle(FormEvent::Submit).unwrap();
//! assert!(outcome.payload().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod display;
pub mod engine;
pub mod errors;
pub mod events;
pub mod form;
pub mod observability;
pub mod payload;
pub mod submission;
pub mod testing;
pub mod utils;
pub mod validators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{MessageCatalog, RuleConfig};
    pub use crate::core::{
        Appearance, Failure, FailureKind, FieldId, FieldKind, FieldStatus, FieldValue,
    };
    pub use crate::display::{DisplayMap, FieldDisplay, MemoryDisplay};
    pub use crate::engine::ValidationEngine;
    pub use crate::errors::FormError;
    pub use crate::events::{EventOutcome, FormController, FormEvent};
    pub use crate::form::{FieldState, Form};
    pub use crate::payload::SubmissionPayload;
    pub use crate::submission::{
        CollectingSubmissionSink, LoggingSubmissionSink, NoOpSubmissionSink, SubmissionSink,
    };
    pub use crate::validators::{Validator, ValidatorSet};
}
