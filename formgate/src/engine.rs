//! The validation engine.
//!
//! [`ValidationEngine`] owns the field state, the validator set and the
//! display handles. Every validation is synchronous and runs to completion
//! before returning.

use tracing::{debug, info};

use crate::config::RuleConfig;
use crate::core::{Appearance, FieldId, FieldStatus, FieldValue};
use crate::display::{DisplayMap, FieldDisplay, MemoryDisplay};
use crate::errors::Result;
use crate::form::Form;
use crate::payload::SubmissionPayload;
use crate::utils::{now_utc, Timestamp};
use crate::validators::ValidatorSet;

/// Validates form fields and keeps their displays in sync.
#[derive(Debug, Clone)]
pub struct ValidationEngine<D> {
    validators: ValidatorSet,
    form: Form,
    displays: DisplayMap<D>,
}

impl ValidationEngine<MemoryDisplay> {
    /// An engine with the standard rules and an in-memory display per field.
    #[must_use]
    pub fn headless(config: &RuleConfig) -> Self {
        Self::new(ValidatorSet::standard(config), DisplayMap::for_all_fields())
    }
}

impl<D: FieldDisplay> ValidationEngine<D> {
    /// Creates an engine over an empty form.
    #[must_use]
    pub fn new(validators: ValidatorSet, displays: DisplayMap<D>) -> Self {
        Self {
            validators,
            form: Form::new(),
            displays,
        }
    }

    /// Creates an engine with the standard rules.
    #[must_use]
    pub fn standard(config: &RuleConfig, displays: DisplayMap<D>) -> Self {
        Self::new(ValidatorSet::standard(config), displays)
    }

    /// The validators in use.
    #[must_use]
    pub const fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    /// The current form state.
    #[must_use]
    pub const fn form(&self) -> &Form {
        &self.form
    }

    /// The display handle of `field`.
    #[must_use]
    pub fn display(&self, field: FieldId) -> Option<&D> {
        self.displays.get(field)
    }

    /// The last validation status of `field`.
    #[must_use]
    pub fn status(&self, field: FieldId) -> &FieldStatus {
        self.form.status(field)
    }

    /// The current raw value of `field`.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &FieldValue {
        self.form.value(field)
    }

    /// Replaces the raw value of `field` without validating it.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<FieldValue>) -> Result<()> {
        self.form.set_value(field, value.into())
    }

    /// Returns true if `field` currently shows an error.
    ///
    /// Asks the display when there is one; otherwise falls back to the status.
    #[must_use]
    pub fn error_visible(&self, field: FieldId) -> bool {
        self.displays.get(field).map_or_else(
            || self.form.status(field).is_invalid(),
            FieldDisplay::error_visible,
        )
    }

    /// Validates one field and updates its status and display.
    ///
    /// A field without a validator is always valid.
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        let status = match self.validators.check(field, self.form.value(field)) {
            Some(failure) => FieldStatus::Invalid(failure),
            None => FieldStatus::Valid,
        };
        let valid = status.is_valid();

        if let Some(failure) = status.failure() {
            debug!(field = %field, kind = %failure.kind, "Field rejected");
        } else {
            debug!(field = %field, "Field accepted");
        }

        self.render(field, &status);
        self.form.set_status(field, status);
        valid
    }

    /// Validates a field by name. Names that match no field are always valid.
    pub fn validate_named(&mut self, name: &str) -> bool {
        match name.parse::<FieldId>() {
            Ok(field) => self.validate_field(field),
            Err(_) => {
                debug!(field = name, "No validator for unknown field");
                true
            }
        }
    }

    /// Validates every field exactly once and returns true if all passed.
    ///
    /// Does not stop at the first failure, so every problem is shown at once.
    pub fn validate_form(&mut self) -> bool {
        FieldId::ALL
            .into_iter()
            .fold(true, |all_valid, field| self.validate_field(field) && all_valid)
    }

    /// Fields whose last validation failed, in form order.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.form
            .fields()
            .filter(|state| state.status.is_invalid())
            .map(|state| state.id)
            .collect()
    }

    /// Returns every field to empty and untouched and clears all displays.
    pub fn reset(&mut self) {
        self.form.reset();
        for field in FieldId::ALL {
            self.render(field, &FieldStatus::Untouched);
        }
    }

    /// Runs a full validation; on success captures the payload and resets.
    pub fn submit(&mut self) -> Option<SubmissionPayload> {
        self.submit_at(now_utc())
    }

    /// Like [`submit`](Self::submit), stamping the payload with `timestamp`.
    pub fn submit_at(&mut self, timestamp: Timestamp) -> Option<SubmissionPayload> {
        if !self.validate_form() {
            debug!(invalid = ?self.invalid_fields(), "Submit rejected");
            return None;
        }

        let payload = SubmissionPayload::collect(&self.form, timestamp);
        self.reset();
        info!(timestamp = %payload.timestamp, "Submit accepted");
        Some(payload)
    }

    fn render(&mut self, field: FieldId, status: &FieldStatus) {
        let Some(display) = self.displays.get_mut(field) else {
            debug!(field = %field, "No display attached");
            return;
        };
        match status {
            FieldStatus::Invalid(failure) => display.show_error(&failure.message),
            FieldStatus::Valid | FieldStatus::Untouched => display.clear_error(),
        }
        display.set_appearance(status.appearance());
    }
}

impl<D> ValidationEngine<D> {
    /// The appearance implied by the status of `field`.
    #[must_use]
    pub fn appearance(&self, field: FieldId) -> Appearance {
        self.form.status(field).appearance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Failure, FailureKind};
    use pretty_assertions::assert_eq;

    fn engine() -> ValidationEngine<MemoryDisplay> {
        ValidationEngine::headless(&RuleConfig::default())
    }

    fn display(engine: &ValidationEngine<MemoryDisplay>, field: FieldId) -> MemoryDisplay {
        engine.display(field).cloned().unwrap()
    }

    #[test]
    fn test_validate_field_failure_shows_error() {
        let mut engine = engine();
        engine.set_value(FieldId::FullName, "Al").unwrap();

        assert!(!engine.validate_field(FieldId::FullName));
        let shown = display(&engine, FieldId::FullName);
        assert!(shown.error_visible());
        assert_eq!(shown.error_text(), "El nombre debe tener al menos 3 caracteres");
        assert_eq!(shown.appearance(), Appearance::Invalid);
        assert_eq!(
            engine.status(FieldId::FullName).failure().map(|f| f.kind),
            Some(FailureKind::TooShort)
        );
    }

    #[test]
    fn test_validate_field_success_clears_error() {
        let mut engine = engine();
        engine.validate_field(FieldId::Email);
        assert!(engine.error_visible(FieldId::Email));

        engine.set_value(FieldId::Email, "ana@x.com").unwrap();
        assert!(engine.validate_field(FieldId::Email));
        let shown = display(&engine, FieldId::Email);
        assert!(!shown.error_visible());
        assert_eq!(shown.error_text(), "");
        assert_eq!(shown.appearance(), Appearance::Valid);
        assert_eq!(engine.status(FieldId::Email), &FieldStatus::Valid);
    }

    #[test]
    fn test_validate_field_idempotent() {
        let mut engine = engine();
        engine.set_value(FieldId::Message, "short").unwrap();

        let first = engine.validate_field(FieldId::Message);
        let first_display = display(&engine, FieldId::Message);
        let first_status = engine.status(FieldId::Message).clone();

        let second = engine.validate_field(FieldId::Message);
        let second_display = display(&engine, FieldId::Message);

        assert_eq!(first, second);
        assert_eq!(&first_status, engine.status(FieldId::Message));
        assert_eq!(second_display.error_text(), first_display.error_text());
        assert_eq!(second_display.appearance(), first_display.appearance());
        assert_eq!(second_display.error_visible(), first_display.error_visible());
    }

    #[test]
    fn test_validate_form_empty_reports_all_seven() {
        let mut engine = engine();
        assert!(!engine.validate_form());
        assert_eq!(engine.invalid_fields(), FieldId::ALL.to_vec());
        for field in FieldId::ALL {
            let shown = display(&engine, field);
            assert!(shown.error_visible(), "{field} should show an error");
            assert!(!shown.error_text().is_empty());
        }
    }

    #[test]
    fn test_validate_form_does_not_short_circuit() {
        let counted = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let mut builder = ValidatorSet::builder();
        for field in FieldId::ALL {
            let counted = std::sync::Arc::clone(&counted);
            builder = builder.with(field, move |_: &FieldValue| {
                counted.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                Some(Failure::new(FailureKind::Required, "required"))
            });
        }
        let mut engine =
            ValidationEngine::new(builder.build(), DisplayMap::<MemoryDisplay>::new());

        assert!(!engine.validate_form());
        assert_eq!(counted.load(std::sync::atomic::Ordering::SeqCst), 7);
    }

    #[test]
    fn test_unregistered_field_is_valid() {
        let validators = ValidatorSet::builder()
            .with(FieldId::Email, |_: &FieldValue| None)
            .build();
        let mut engine =
            ValidationEngine::new(validators, DisplayMap::<MemoryDisplay>::for_all_fields());

        assert!(engine.validate_field(FieldId::Phone));
        assert!(engine.validate_form());
    }

    #[test]
    fn test_validate_named() {
        let mut engine = engine();
        assert!(engine.validate_named("nickname"));
        assert!(!engine.validate_named("email"));
        assert!(engine.error_visible(FieldId::Email));
    }

    #[test]
    fn test_missing_display_still_validates() {
        let mut engine = ValidationEngine::standard(
            &RuleConfig::default(),
            DisplayMap::new().with(FieldId::Email, MemoryDisplay::new()),
        );
        assert!(!engine.validate_field(FieldId::Phone));
        assert!(engine.status(FieldId::Phone).is_invalid());
        assert!(engine.error_visible(FieldId::Phone));
        assert_eq!(engine.appearance(FieldId::Phone), Appearance::Invalid);
    }

    #[test]
    fn test_reset_clears_displays() {
        let mut engine = engine();
        engine.set_value(FieldId::City, FieldValue::chosen("Centro")).unwrap();
        engine.validate_form();

        engine.reset();
        assert!(engine.form().is_pristine());
        for field in FieldId::ALL {
            assert!(display(&engine, field).is_blank(), "{field} not cleared");
        }
    }

    #[test]
    fn test_submit_rejected_keeps_state() {
        let mut engine = engine();
        engine.set_value(FieldId::FullName, "Ana Pérez").unwrap();
        assert!(engine.submit().is_none());
        assert_eq!(engine.value(FieldId::FullName).as_str(), "Ana Pérez");
        assert_eq!(engine.status(FieldId::FullName), &FieldStatus::Valid);
        assert_eq!(engine.invalid_fields().len(), 6);
    }
}
