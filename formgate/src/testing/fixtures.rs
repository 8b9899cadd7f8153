//! Test fixtures for form validation.

use chrono::{TimeZone, Utc};

use crate::config::RuleConfig;
use crate::core::{FieldId, FieldValue};
use crate::display::MemoryDisplay;
use crate::engine::ValidationEngine;
use crate::events::FormEvent;
use crate::utils::Timestamp;

/// A complete set of form values, by default one that passes every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSubmission {
    values: Vec<(FieldId, FieldValue)>,
}

impl Default for TestSubmission {
    fn default() -> Self {
        Self::valid()
    }
}

impl TestSubmission {
    /// Values that pass the standard rules.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            values: vec![
                (FieldId::FullName, FieldValue::text("Ana Pérez")),
                (FieldId::Email, FieldValue::text("ana@x.com")),
                (FieldId::Phone, FieldValue::text("5551234567")),
                (FieldId::State, FieldValue::chosen("CDMX")),
                (FieldId::City, FieldValue::chosen("Centro")),
                (FieldId::Profile, FieldValue::chosen("basic")),
                (FieldId::Message, FieldValue::text("Hola, necesito informacion")),
            ],
        }
    }

    /// Replaces the value of `field`.
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<FieldValue>) -> Self {
        let value = value.into();
        match self.values.iter_mut().find(|(id, _)| *id == field) {
            Some(entry) => entry.1 = value,
            None => self.values.push((field, value)),
        }
        self
    }

    /// The value for `field`.
    #[must_use]
    pub fn value(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.iter().find(|(id, _)| *id == field).map(|(_, v)| v)
    }

    /// The events a user would raise filling the form in order.
    ///
    /// Text and select fields are typed then blurred; the profile is chosen.
    #[must_use]
    pub fn events(&self) -> Vec<FormEvent> {
        let mut events = Vec::with_capacity(self.values.len() * 2);
        for (field, value) in &self.values {
            if field.kind() == crate::core::FieldKind::Choice {
                events.push(FormEvent::ChoiceChanged {
                    field: *field,
                    value: value.selected().map(str::to_string),
                });
            } else {
                events.push(FormEvent::Input {
                    field: *field,
                    value: value.clone(),
                });
                events.push(FormEvent::blur(*field));
            }
        }
        events
    }

    /// Writes every value into `engine` without validating.
    pub fn apply(&self, engine: &mut ValidationEngine<MemoryDisplay>) -> crate::errors::Result<()> {
        for (field, value) in &self.values {
            engine.set_value(*field, value.clone())?;
        }
        Ok(())
    }
}

/// A headless engine with the standard rules.
#[must_use]
pub fn test_engine() -> ValidationEngine<MemoryDisplay> {
    ValidationEngine::headless(&RuleConfig::default())
}

/// A fixed timestamp for deterministic payloads.
#[must_use]
pub fn fixed_timestamp() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0)
        .single()
        .unwrap_or_default()
}
