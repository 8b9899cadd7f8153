//! Test assertions for engine state.

use crate::core::{Appearance, FailureKind, FieldId, FieldStatus};
use crate::display::{FieldDisplay, MemoryDisplay};
use crate::engine::ValidationEngine;

/// Asserts that `field` is valid and displayed as such.
pub fn assert_field_valid(engine: &ValidationEngine<MemoryDisplay>, field: FieldId) {
    assert_eq!(
        engine.status(field),
        &FieldStatus::Valid,
        "Expected {field} to be valid"
    );
    assert_display_consistent(engine, field);
}

/// Asserts that `field` failed with `kind` and shows an error.
pub fn assert_field_invalid(
    engine: &ValidationEngine<MemoryDisplay>,
    field: FieldId,
    kind: FailureKind,
) {
    let actual = engine.status(field).failure().map(|f| f.kind);
    assert_eq!(
        actual,
        Some(kind),
        "Expected {field} to fail with {kind}, got status {:?}",
        engine.status(field)
    );
    assert_display_consistent(engine, field);
}

/// Asserts that `field` is untouched and its display blank.
pub fn assert_field_untouched(engine: &ValidationEngine<MemoryDisplay>, field: FieldId) {
    assert_eq!(
        engine.status(field),
        &FieldStatus::Untouched,
        "Expected {field} to be untouched"
    );
    if let Some(display) = engine.display(field) {
        assert!(display.is_blank(), "Expected {field} display to be blank: {display:?}");
    }
}

/// Asserts that the display of `field` agrees with its status: an error is
/// shown exactly when the control is marked invalid.
pub fn assert_display_consistent(engine: &ValidationEngine<MemoryDisplay>, field: FieldId) {
    let Some(display) = engine.display(field) else {
        return;
    };
    let status = engine.status(field);
    assert_eq!(
        display.appearance(),
        status.appearance(),
        "Appearance of {field} does not match status {status:?}"
    );
    assert_eq!(
        display.error_visible(),
        display.appearance() == Appearance::Invalid,
        "Error visibility of {field} disagrees with its appearance"
    );
    match status.failure() {
        Some(failure) => assert_eq!(display.error_text(), failure.message),
        None => assert!(display.error_text().is_empty()),
    }
}
