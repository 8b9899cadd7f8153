//! Field identifiers and raw field values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::FormError;

/// Identifier of one field of the contact form.
///
/// The set is fixed; [`FieldId::ALL`] lists the fields in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    /// The sender's full name.
    FullName,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Phone,
    /// Region selector.
    State,
    /// City selector.
    City,
    /// Mutually exclusive profile options.
    Profile,
    /// Free-form message.
    Message,
}

/// How a field collects its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text input or text area.
    Text,
    /// Single-select drop-down.
    Select,
    /// Radio group. Has no blur signal of its own.
    Choice,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [Self; 7] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::State,
        Self::City,
        Self::Profile,
        Self::Message,
    ];

    /// The name used for this field on the wire and in markup.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::State => "state",
            Self::City => "city",
            Self::Profile => "profile",
            Self::Message => "message",
        }
    }

    /// The kind of control backing this field.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::FullName | Self::Email | Self::Phone | Self::Message => FieldKind::Text,
            Self::State | Self::City => FieldKind::Select,
            Self::Profile => FieldKind::Choice,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// The raw, unvalidated value of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text typed by the user.
    Text(String),
    /// The selected option, if any.
    Choice(Option<String>),
}

impl FieldValue {
    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a choice value with `option` selected.
    #[must_use]
    pub fn chosen(option: impl Into<String>) -> Self {
        Self::Choice(Some(option.into()))
    }

    /// The empty value for a field of `kind`.
    #[must_use]
    pub const fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::Select | FieldKind::Choice => Self::Choice(None),
        }
    }

    /// The value as a string slice; an empty selection reads as `""`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Choice(Some(option)) => option,
            Self::Choice(None) => "",
        }
    }

    /// The selected option, treating an empty option as no selection.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        Some(self.as_str()).filter(|s| !s.is_empty())
    }

    /// Returns true if the value is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Returns true for [`FieldValue::Choice`].
    #[must_use]
    pub const fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }

    /// Converts this value to the shape a field of `kind` holds.
    ///
    /// Text becomes a selection for select and choice fields, with empty text
    /// meaning nothing selected. A selection cannot become text: returns `None`.
    #[must_use]
    pub fn into_kind(self, kind: FieldKind) -> Option<Self> {
        match (kind, self) {
            (FieldKind::Text, Self::Text(text)) => Some(Self::Text(text)),
            (FieldKind::Text, Self::Choice(_)) => None,
            (FieldKind::Select | FieldKind::Choice, Self::Text(text)) => {
                Some(Self::Choice(Some(text).filter(|s| !s.is_empty())))
            }
            (FieldKind::Select | FieldKind::Choice, choice @ Self::Choice(_)) => Some(choice),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        Self::Choice(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_roundtrip_names() {
        for id in FieldId::ALL {
            assert_eq!(id.as_str().parse::<FieldId>().unwrap(), id);
        }
    }

    #[test]
    fn test_field_id_unknown_name() {
        let err = "nickname".parse::<FieldId>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(name) if name == "nickname"));
    }

    #[test]
    fn test_field_id_serialize() {
        let json = serde_json::to_string(&FieldId::FullName).unwrap();
        assert_eq!(json, r#""fullName""#);
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FieldId::Email.kind(), FieldKind::Text);
        assert_eq!(FieldId::City.kind(), FieldKind::Select);
        assert_eq!(FieldId::Profile.kind(), FieldKind::Choice);
    }

    #[test]
    fn test_value_selected() {
        assert_eq!(FieldValue::chosen("CDMX").selected(), Some("CDMX"));
        assert_eq!(FieldValue::Choice(Some(String::new())).selected(), None);
        assert_eq!(FieldValue::Choice(None).selected(), None);
        assert_eq!(FieldValue::text("x").selected(), Some("x"));
    }

    #[test]
    fn test_value_blank() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(FieldValue::Choice(None).is_blank());
        assert!(!FieldValue::text(" a ").is_blank());
    }

    #[test]
    fn test_value_into_kind() {
        assert_eq!(
            FieldValue::text("a").into_kind(FieldKind::Text),
            Some(FieldValue::text("a"))
        );
        assert_eq!(
            FieldValue::text("CDMX").into_kind(FieldKind::Select),
            Some(FieldValue::chosen("CDMX"))
        );
        assert_eq!(
            FieldValue::text("").into_kind(FieldKind::Choice),
            Some(FieldValue::Choice(None))
        );
        assert_eq!(FieldValue::Choice(None).into_kind(FieldKind::Text), None);
    }

    #[test]
    fn test_select_value_json_reads_back_as_choice() {
        let json = serde_json::to_string(&FieldValue::chosen("CDMX")).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_kind(FieldKind::Select), Some(FieldValue::chosen("CDMX")));
    }
}
