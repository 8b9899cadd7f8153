//! The structured snapshot produced by a successful submit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::FieldId;
use crate::form::Form;
use crate::utils::timestamps::{iso_millis, iso_millis_format};
use crate::utils::Timestamp;

/// Field values captured by a fully valid submit, plus when it happened.
///
/// Serializes flat, keyed by the form's field names plus `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Selected state.
    pub state: String,
    /// Selected city.
    pub city: String,
    /// Selected profile option.
    pub profile: String,
    /// Message body.
    pub message: String,
    /// When the payload was created.
    #[serde(with = "iso_millis_format")]
    pub timestamp: Timestamp,
}

impl SubmissionPayload {
    /// Captures the raw values of `form`.
    #[must_use]
    pub fn collect(form: &Form, timestamp: Timestamp) -> Self {
        let take = |field: FieldId| form.value(field).as_str().to_string();
        Self {
            full_name: take(FieldId::FullName),
            email: take(FieldId::Email),
            phone: take(FieldId::Phone),
            state: take(FieldId::State),
            city: take(FieldId::City),
            profile: take(FieldId::Profile),
            message: take(FieldId::Message),
            timestamp,
        }
    }

    /// The value captured for `field`.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::State => &self.state,
            FieldId::City => &self.city,
            FieldId::Profile => &self.profile,
            FieldId::Message => &self.message,
        }
    }

    /// Flat key/value mapping: one entry per field plus `timestamp`.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = FieldId::ALL
            .into_iter()
            .map(|field| (field.to_string(), self.get(field).to_string()))
            .collect();
        map.insert("timestamp".to_string(), iso_millis(&self.timestamp));
        map
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn filled_form() -> Form {
        let mut form = Form::new();
        form.set_value(FieldId::FullName, FieldValue::text("Ana Pérez")).unwrap();
        form.set_value(FieldId::Email, FieldValue::text("ana@x.com")).unwrap();
        form.set_value(FieldId::Phone, FieldValue::text("5551234567")).unwrap();
        form.set_value(FieldId::State, FieldValue::chosen("CDMX")).unwrap();
        form.set_value(FieldId::City, FieldValue::chosen("Centro")).unwrap();
        form.set_value(FieldId::Profile, FieldValue::chosen("basic")).unwrap();
        form.set_value(FieldId::Message, FieldValue::text("Hola, necesito informacion"))
            .unwrap();
        form
    }

    fn fixed_time() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_collect() {
        let payload = SubmissionPayload::collect(&filled_form(), fixed_time());
        assert_eq!(payload.full_name, "Ana Pérez");
        assert_eq!(payload.profile, "basic");
        assert_eq!(payload.get(FieldId::City), "Centro");
    }

    #[test]
    fn test_json_shape() {
        let payload = SubmissionPayload::collect(&filled_form(), fixed_time());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Ana Pérez",
                "email": "ana@x.com",
                "phone": "5551234567",
                "state": "CDMX",
                "city": "Centro",
                "profile": "basic",
                "message": "Hola, necesito informacion",
                "timestamp": "2026-10-16T12:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_json_deserialize() {
        let payload = SubmissionPayload::collect(&filled_form(), fixed_time());
        let pretty = payload.to_json_pretty().unwrap();
        assert!(pretty.contains("\n  \"fullName\""));
        let back: SubmissionPayload = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_to_map_keys() {
        let map = SubmissionPayload::collect(&filled_form(), fixed_time()).to_map();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["city", "email", "fullName", "message", "phone", "profile", "state", "timestamp"]
        );
    }
}
