//! Field validators.
//!
//! [`rules`] holds the standard checks as plain functions; [`ValidatorSet`]
//! binds one validator to each field and is built once, then shared.

pub mod rules;
mod set;

pub use set::{Validator, ValidatorSet, ValidatorSetBuilder};
