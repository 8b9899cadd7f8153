//! Rule thresholds and user-facing messages.
//!
//! Every key has a default, so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Failure, FailureKind, FieldId};
use crate::errors::{FormError, Result};

/// Configuration for the standard field rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Minimum trimmed character count for the full name.
    #[serde(default = "default_min_name_chars")]
    pub min_name_chars: usize,
    /// Minimum trimmed character count for the message.
    #[serde(default = "default_min_message_chars")]
    pub min_message_chars: usize,
    /// Minimum number of phone characters (digits, spaces, `-`, `+`, `(`, `)`).
    #[serde(default = "default_min_phone_chars")]
    pub min_phone_chars: usize,
    /// Messages shown to the user.
    #[serde(default)]
    pub messages: MessageCatalog,
}

fn default_min_name_chars() -> usize {
    3
}

fn default_min_message_chars() -> usize {
    10
}

fn default_min_phone_chars() -> usize {
    10
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_name_chars: default_min_name_chars(),
            min_message_chars: default_min_message_chars(),
            min_phone_chars: default_min_phone_chars(),
            messages: MessageCatalog::default(),
        }
    }
}

impl RuleConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Sets the minimum full name length.
    #[must_use]
    pub fn with_min_name_chars(mut self, chars: usize) -> Self {
        self.min_name_chars = chars;
        self
    }

    /// Sets the minimum message length.
    #[must_use]
    pub fn with_min_message_chars(mut self, chars: usize) -> Self {
        self.min_message_chars = chars;
        self
    }

    /// Sets the minimum phone length.
    #[must_use]
    pub fn with_min_phone_chars(mut self, chars: usize) -> Self {
        self.min_phone_chars = chars;
        self
    }

    /// Replaces the message catalog.
    #[must_use]
    pub fn with_messages(mut self, messages: MessageCatalog) -> Self {
        self.messages = messages;
        self
    }

    /// The configured minimum length for `field`, if it has one.
    #[must_use]
    pub const fn min_chars(&self, field: FieldId) -> Option<usize> {
        match field {
            FieldId::FullName => Some(self.min_name_chars),
            FieldId::Phone => Some(self.min_phone_chars),
            FieldId::Message => Some(self.min_message_chars),
            FieldId::Email | FieldId::State | FieldId::City | FieldId::Profile => None,
        }
    }

    /// Builds a [`Failure`] carrying the catalog message, with `{min}`
    /// replaced by the field's minimum length.
    #[must_use]
    pub fn failure(&self, field: FieldId, kind: FailureKind) -> Failure {
        let text = self.messages.message_for(field, kind);
        match self.min_chars(field) {
            Some(min) => Failure::new(kind, text.replace("{min}", &min.to_string())),
            None => Failure::new(kind, text),
        }
    }

    /// Rejects thresholds the rules cannot honor.
    pub fn check(&self) -> Result<()> {
        if self.min_phone_chars == 0 {
            return Err(FormError::Config(
                "min_phone_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// User-facing messages, one per field and failure.
///
/// Length messages may contain `{min}`, filled in from [`RuleConfig`].
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    pub full_name_required: String,
    pub full_name_too_short: String,
    pub full_name_invalid_characters: String,
    pub email_required: String,
    pub email_invalid: String,
    pub phone_required: String,
    pub phone_invalid: String,
    pub state_required: String,
    pub city_required: String,
    pub profile_required: String,
    pub message_required: String,
    pub message_too_short: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::spanish()
    }
}

impl MessageCatalog {
    /// The Spanish catalog used by the site.
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            full_name_required: "El nombre completo es requerido".to_string(),
            full_name_too_short: "El nombre debe tener al menos {min} caracteres".to_string(),
            full_name_invalid_characters: "El nombre solo puede contener letras y espacios"
                .to_string(),
            email_required: "El correo electrónico es requerido".to_string(),
            email_invalid: "Ingresa un correo electrónico válido".to_string(),
            phone_required: "El teléfono es requerido".to_string(),
            phone_invalid: "Ingresa un teléfono válido".to_string(),
            state_required: "Selecciona un estado".to_string(),
            city_required: "Selecciona una ciudad".to_string(),
            profile_required: "Selecciona un perfil".to_string(),
            message_required: "El mensaje es requerido".to_string(),
            message_too_short: "El mensaje debe tener al menos {min} caracteres".to_string(),
        }
    }

    /// An English catalog.
    #[must_use]
    pub fn english() -> Self {
        Self {
            full_name_required: "Full name is required".to_string(),
            full_name_too_short: "Name must be at least {min} characters".to_string(),
            full_name_invalid_characters: "Name may only contain letters and spaces"
                .to_string(),
            email_required: "Email is required".to_string(),
            email_invalid: "Enter a valid email address".to_string(),
            phone_required: "Phone is required".to_string(),
            phone_invalid: "Enter a valid phone number".to_string(),
            state_required: "Select a state".to_string(),
            city_required: "Select a city".to_string(),
            profile_required: "Select a profile".to_string(),
            message_required: "Message is required".to_string(),
            message_too_short: "Message must be at least {min} characters".to_string(),
        }
    }

    /// Looks up the message for a failure of `field`.
    ///
    /// Combinations no rule produces fall back to the field's "required" text.
    #[must_use]
    pub fn message_for(&self, field: FieldId, kind: FailureKind) -> &str {
        match (field, kind) {
            (FieldId::FullName, FailureKind::TooShort) => &self.full_name_too_short,
            (FieldId::FullName, FailureKind::InvalidCharacters) => {
                &self.full_name_invalid_characters
            }
            (FieldId::FullName, _) => &self.full_name_required,
            (FieldId::Email, FailureKind::Required) => &self.email_required,
            (FieldId::Email, _) => &self.email_invalid,
            (FieldId::Phone, FailureKind::Required) => &self.phone_required,
            (FieldId::Phone, _) => &self.phone_invalid,
            (FieldId::State, _) => &self.state_required,
            (FieldId::City, _) => &self.city_required,
            (FieldId::Profile, _) => &self.profile_required,
            (FieldId::Message, FailureKind::TooShort) => &self.message_too_short,
            (FieldId::Message, _) => &self.message_required,
        }
    }
}
