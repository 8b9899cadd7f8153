//! Error types for formgate.
//!
//! A rejected field value is not an error: it is reported through
//! [`FieldStatus::Invalid`](crate::core::FieldStatus). The variants below only
//! cover misuse of the API and configuration problems.

use thiserror::Error;

use crate::core::{FieldId, FieldKind};

/// The main error type for formgate operations.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name did not match any field of the form.
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    /// A value of the wrong shape was supplied for a field.
    #[error("Field '{field}' expects a {expected} value, got a {found} value")]
    ValueKindMismatch {
        /// The field that received the value.
        field: FieldId,
        /// The kind of value the field holds.
        expected: &'static str,
        /// The kind of value that was supplied.
        found: &'static str,
    },

    /// The rule configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormError {
    /// Builds a kind mismatch error for `field`.
    #[must_use]
    pub fn kind_mismatch(field: FieldId, found_choice: bool) -> Self {
        let expected = match field.kind() {
            FieldKind::Text => "text",
            FieldKind::Select | FieldKind::Choice => "choice",
        };
        let found = if found_choice { "choice" } else { "text" };
        Self::ValueKindMismatch {
            field,
            expected,
            found,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FormError>;
