//! The standard field rules.
//!
//! Each rule is a pure function of the configuration and the supplied value.
//! Checks run in order and the first failure wins.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::RuleConfig;
use crate::core::{Failure, FailureKind, FieldId, FieldValue};

static NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúñÁÉÍÓÚÑ\s]+$").expect("name pattern is valid")
});

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9\s+()\-]+$").expect("phone pattern is valid")
});

fn fail(config: &RuleConfig, field: FieldId, kind: FailureKind) -> Option<Failure> {
    Some(config.failure(field, kind))
}

/// Full name: required, at least `min_name_chars` once trimmed, letters and spaces only.
pub fn full_name(config: &RuleConfig, value: &FieldValue) -> Option<Failure> {
    let raw = value.as_str();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fail(config, FieldId::FullName, FailureKind::Required);
    }
    if trimmed.chars().count() < config.min_name_chars {
        return fail(config, FieldId::FullName, FailureKind::TooShort);
    }
    if !NAME_CHARS.is_match(raw) {
        return fail(config, FieldId::FullName, FailureKind::InvalidCharacters);
    }
    None
}

/// Email: required, then `local@domain.tld` with no whitespace.
pub fn email(config: &RuleConfig, value: &FieldValue) -> Option<Failure> {
    let raw = value.as_str();
    if raw.trim().is_empty() {
        return fail(config, FieldId::Email, FailureKind::Required);
    }
    if !EMAIL_SHAPE.is_match(raw) {
        return fail(config, FieldId::Email, FailureKind::InvalidFormat);
    }
    None
}

/// Phone: required, then only digits, spaces, `-`, `+`, `(`, `)` and at
/// least `min_phone_chars` of them.
pub fn phone(config: &RuleConfig, value: &FieldValue) -> Option<Failure> {
    let raw = value.as_str();
    if raw.trim().is_empty() {
        return fail(config, FieldId::Phone, FailureKind::Required);
    }
    if !PHONE_CHARS.is_match(raw) || raw.chars().count() < config.min_phone_chars {
        return fail(config, FieldId::Phone, FailureKind::InvalidFormat);
    }
    None
}

/// Any selector: some non-empty option must be selected.
pub fn required_choice(config: &RuleConfig, field: FieldId, value: &FieldValue) -> Option<Failure> {
    if value.selected().is_none() {
        return fail(config, field, FailureKind::Required);
    }
    None
}

/// Message: required, at least `min_message_chars` once trimmed.
pub fn message(config: &RuleConfig, value: &FieldValue) -> Option<Failure> {
    let trimmed = value.as_str().trim();
    if trimmed.is_empty() {
        return fail(config, FieldId::Message, FailureKind::Required);
    }
    if trimmed.chars().count() < config.min_message_chars {
        return fail(config, FieldId::Message, FailureKind::TooShort);
    }
    None
}
