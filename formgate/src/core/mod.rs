//! Core domain model types for formgate.
//!
//! This module contains the fundamental types used throughout the crate:
//! - Field identifiers, kinds and raw values
//! - Field status, failures and control appearance

mod field;
mod status;

pub use field::{FieldId, FieldKind, FieldValue};
pub use status::{Appearance, Failure, FailureKind, FieldStatus};
