//! The ordered set of form fields and their current state.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::core::{FieldId, FieldStatus, FieldValue};
use crate::errors::{FormError, Result};

/// The state of one field: its raw value and last validation status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Field identifier.
    pub id: FieldId,
    /// Current raw value.
    pub value: FieldValue,
    /// Status from the last validation.
    pub status: FieldStatus,
}

impl FieldState {
    /// A field with an empty value that has not been validated.
    #[must_use]
    pub const fn untouched(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::empty_for(id.kind()),
            status: FieldStatus::Untouched,
        }
    }

    /// Returns true if the field is empty and untouched.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.status == FieldStatus::Untouched && self.value.as_str().is_empty()
    }
}

/// The seven form fields, in form order.
///
/// Serializes as an object keyed by field name. Fields missing from the
/// input are read back empty and untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: [FieldState; 7],
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Creates a form with every field empty and untouched.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: FieldId::ALL.map(FieldState::untouched),
        }
    }

    // `FieldId` variants are declared in form order.
    const fn index(field: FieldId) -> usize {
        field as usize
    }

    /// The state of `field`.
    #[must_use]
    pub fn field(&self, field: FieldId) -> &FieldState {
        &self.fields[Self::index(field)]
    }

    /// All field states, in form order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldState> {
        self.fields.iter()
    }

    /// The current raw value of `field`.
    #[must_use]
    pub fn value(&self, field: FieldId) -> &FieldValue {
        &self.field(field).value
    }

    /// Replaces the raw value of `field`.
    ///
    /// Text sent to a select or choice field is taken as the selected option.
    /// The status is left as it was; only validation changes it.
    pub fn set_value(&mut self, field: FieldId, value: FieldValue) -> Result<()> {
        let value = value
            .into_kind(field.kind())
            .ok_or_else(|| FormError::kind_mismatch(field, true))?;
        self.fields[Self::index(field)].value = value;
        Ok(())
    }

    /// The last validation status of `field`.
    #[must_use]
    pub fn status(&self, field: FieldId) -> &FieldStatus {
        &self.field(field).status
    }

    /// Records a validation status for `field`.
    pub fn set_status(&mut self, field: FieldId, status: FieldStatus) {
        self.fields[Self::index(field)].status = status;
    }

    /// True only if every field is currently valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|state| state.status.is_valid())
    }

    /// Returns every field to empty and untouched.
    pub fn reset(&mut self) {
        for state in &mut self.fields {
            *state = FieldState::untouched(state.id);
        }
    }

    /// Returns true if every field is empty and untouched.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.fields.iter().all(FieldState::is_pristine)
    }

    /// Flat snapshot of the raw values keyed by field name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|state| (state.id.to_string(), state.value.as_str().to_string()))
            .collect()
    }
}

#[derive(Serialize)]
struct FieldEntryRef<'a> {
    value: &'a FieldValue,
    status: &'a FieldStatus,
}

#[derive(Deserialize)]
struct FieldEntry {
    value: FieldValue,
    #[serde(default)]
    status: FieldStatus,
}

impl Serialize for Form {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for state in &self.fields {
            let entry = FieldEntryRef {
                value: &state.value,
                status: &state.status,
            };
            map.serialize_entry(&state.id, &entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Form {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = BTreeMap::<FieldId, FieldEntry>::deserialize(deserializer)?;
        let mut form = Self::new();
        for (field, entry) in entries {
            form.set_value(field, entry.value)
                .map_err(serde::de::Error::custom)?;
            form.set_status(field, entry.status);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Failure, FailureKind};

    #[test]
    fn test_new_form_is_pristine() {
        let form = Form::new();
        assert!(form.is_pristine());
        assert!(!form.is_valid());
        let order: Vec<FieldId> = form.fields().map(|s| s.id).collect();
        assert_eq!(order, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_empty_values_match_kind() {
        let form = Form::new();
        assert_eq!(form.value(FieldId::Email), &FieldValue::Text(String::new()));
        assert_eq!(form.value(FieldId::State), &FieldValue::Choice(None));
        assert_eq!(form.value(FieldId::Profile), &FieldValue::Choice(None));
    }

    #[test]
    fn test_set_value_keeps_status() {
        let mut form = Form::new();
        form.set_status(FieldId::Email, FieldStatus::Valid);
        form.set_value(FieldId::Email, FieldValue::text("a@b.c")).unwrap();
        assert_eq!(form.value(FieldId::Email).as_str(), "a@b.c");
        assert_eq!(form.status(FieldId::Email), &FieldStatus::Valid);
    }

    #[test]
    fn test_set_value_kind_mismatch() {
        let mut form = Form::new();
        let err = form
            .set_value(FieldId::Phone, FieldValue::Choice(None))
            .unwrap_err();
        assert!(matches!(
            err,
            FormError::ValueKindMismatch {
                field: FieldId::Phone,
                ..
            }
        ));
    }

    #[test]
    fn test_set_value_text_on_select_becomes_selection() {
        let mut form = Form::new();
        form.set_value(FieldId::City, FieldValue::text("Centro")).unwrap();
        assert_eq!(form.value(FieldId::City), &FieldValue::chosen("Centro"));

        form.set_value(FieldId::City, FieldValue::text("")).unwrap();
        assert_eq!(form.value(FieldId::City), &FieldValue::Choice(None));
    }

    #[test]
    fn test_json_roundtrip_keyed_by_field() {
        let mut form = Form::new();
        form.set_value(FieldId::FullName, FieldValue::text("Ana")).unwrap();
        form.set_value(FieldId::City, FieldValue::chosen("Centro")).unwrap();
        form.set_status(FieldId::FullName, FieldStatus::Valid);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["city"]["value"], "Centro");
        assert_eq!(json["fullName"]["status"]["status"], "valid");

        let back: Form = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_json_order_and_missing_fields() {
        let form: Form = serde_json::from_str(
            r#"{"message": {"value": "Hola"}, "state": {"value": "CDMX"}}"#,
        )
        .unwrap();
        assert_eq!(form.value(FieldId::Message).as_str(), "Hola");
        assert_eq!(form.value(FieldId::State), &FieldValue::chosen("CDMX"));
        assert_eq!(form.value(FieldId::Email), &FieldValue::Text(String::new()));
        let order: Vec<FieldId> = form.fields().map(|s| s.id).collect();
        assert_eq!(order, FieldId::ALL.to_vec());
    }

    #[test]
    fn test_json_rejects_selection_for_text_field() {
        let result = serde_json::from_str::<Form>(r#"{"email": {"value": null}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_valid_requires_every_field() {
        let mut form = Form::new();
        for field in FieldId::ALL {
            form.set_status(field, FieldStatus::Valid);
        }
        assert!(form.is_valid());

        form.set_status(
            FieldId::Message,
            FieldStatus::Invalid(Failure::new(FailureKind::TooShort, "short")),
        );
        assert!(!form.is_valid());
    }

    #[test]
    fn test_reset() {
        let mut form = Form::new();
        form.set_value(FieldId::FullName, FieldValue::text("Ana")).unwrap();
        form.set_value(FieldId::Profile, FieldValue::chosen("basic")).unwrap();
        form.set_status(FieldId::FullName, FieldStatus::Valid);

        form.reset();
        assert!(form.is_pristine());
        assert_eq!(form.value(FieldId::Profile), &FieldValue::Choice(None));
    }

    #[test]
    fn test_snapshot_keys() {
        let mut form = Form::new();
        form.set_value(FieldId::State, FieldValue::chosen("CDMX")).unwrap();
        let snapshot = form.snapshot();
        assert_eq!(snapshot.len(), 7);
        assert_eq!(snapshot["state"], "CDMX");
        assert_eq!(snapshot["profile"], "");
    }
}
