//! Utility functions for timestamp handling.

pub mod timestamps;

pub use timestamps::{iso_millis, iso_timestamp, now_utc, parse_iso, Timestamp, TimestampError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_roundtrips_through_iso() {
        let now = now_utc();
        let parsed = parse_iso(&iso_millis(&now)).unwrap();
        assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
    }
}
