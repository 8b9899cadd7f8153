//! Field validation status and the visible style of a control.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The field is empty (or whitespace-only, or nothing is selected).
    Required,
    /// The trimmed value is below the minimum length.
    TooShort,
    /// The value contains characters the field does not accept.
    InvalidCharacters,
    /// The value does not have the expected shape.
    InvalidFormat,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::TooShort => write!(f, "too_short"),
            Self::InvalidCharacters => write!(f, "invalid_characters"),
            Self::InvalidFormat => write!(f, "invalid_format"),
        }
    }
}

/// A rejected value: the machine-readable kind plus the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Failure {
    /// Failure category.
    pub kind: FailureKind,
    /// Localized text displayed next to the field.
    pub message: String,
}

impl Failure {
    /// Creates a new failure.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The validation status of a field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FieldStatus {
    /// Not validated since creation or the last reset.
    #[default]
    Untouched,
    /// The last validation accepted the value.
    Valid,
    /// The last validation rejected the value.
    Invalid(Failure),
}

impl FieldStatus {
    /// Returns true if the last validation accepted the value.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns true if the last validation rejected the value.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The failure, if the field is invalid.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Invalid(failure) => Some(failure),
            _ => None,
        }
    }

    /// The style a control should carry for this status.
    #[must_use]
    pub const fn appearance(&self) -> Appearance {
        match self {
            Self::Untouched => Appearance::Neutral,
            Self::Valid => Appearance::Valid,
            Self::Invalid(_) => Appearance::Invalid,
        }
    }
}

/// Style toggle of a field control.
///
/// A single value, so "valid" and "invalid" can never both be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    /// Neither marked valid nor invalid.
    #[default]
    Neutral,
    /// Marked as accepted.
    Valid,
    /// Marked as rejected.
    Invalid,
}

impl Appearance {
    /// The CSS class conventionally used for this appearance, if any.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Valid => Some("is-valid"),
            Self::Invalid => Some("is-invalid"),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "neutral"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}
