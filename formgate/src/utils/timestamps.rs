//! Timestamp helpers for submission payloads.
//!
//! Payload timestamps are ISO 8601 in UTC with millisecond precision and a
//! `Z` suffix, e.g. `2026-10-16T09:30:00.125Z`.

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Represents a timestamp that can be serialized/deserialized.
pub type Timestamp = DateTime<Utc>;

/// Errors that can occur during timestamp parsing.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The timestamp string is empty.
    #[error("Empty timestamp string")]
    EmptyString,

    /// The timestamp value is invalid.
    #[error("Invalid timestamp: {0}")]
    InvalidFormat(String),
}

/// Returns the current UTC timestamp.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

/// Formats `ts` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use formgate::utils::iso_millis;
///
/// let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
/// assert_eq!(iso_millis(&ts), "2026-01-02T03:04:05.000Z");
/// ```
#[must_use]
pub fn iso_millis(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the current UTC time formatted with [`iso_millis`].
#[must_use]
pub fn iso_timestamp() -> String {
    iso_millis(&now_utc())
}

/// Parses an RFC 3339 / ISO 8601 timestamp with an offset.
pub fn parse_iso(input: &str) -> Result<Timestamp, TimestampError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimestampError::EmptyString);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimestampError::InvalidFormat(trimmed.to_string()))
}

/// Serde adapter writing timestamps with [`iso_millis`].
pub mod iso_millis_format {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{iso_millis, parse_iso, Timestamp};

    /// Serializes `ts` as an ISO string with millisecond precision.
    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&iso_millis(ts))
    }

    /// Deserializes any RFC 3339 timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_iso(&raw).map_err(serde::de::Error::custom)
    }
}
