//! Testing utilities for formgate.
//!
//! This module provides:
//! - A headless engine and a ready-made valid submission
//! - Assertions tying field status to what its display shows

mod assertions;
mod fixtures;

pub use assertions::{
    assert_display_consistent, assert_field_invalid, assert_field_untouched, assert_field_valid,
};
pub use fixtures::{fixed_timestamp, test_engine, TestSubmission};
