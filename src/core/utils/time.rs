//! Time helpers.
//!
//! The service reports timestamps as `YYYY-MM-DD HH:MM:SS` in UTC without a
//! zone designator, and course durations as milliseconds.

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::core::AcademyError;

/// Parse a service timestamp, assuming UTC when no zone is given.
///
/// A space between date and time is normalized to `T`, and a missing zone
/// designator becomes `Z`, so `"2023-01-01 10:00:00"` parses to the same
/// instant as `"2023-01-01T10:00:00Z"`. An explicit offset is honored.
pub fn parse_utc_datetime(raw: &str) -> Result<OffsetDateTime, AcademyError> {
    let mut normalized = raw.trim().replacen(' ', "T", 1);

    if !has_zone_designator(&normalized) {
        normalized.push('Z');
    }

    OffsetDateTime::parse(&normalized, &Rfc3339)
        .map_err(|e| AcademyError::DeserializationError(e.to_string()))
}

fn has_zone_designator(timestamp: &str) -> bool {
    if timestamp.ends_with('Z') || timestamp.ends_with('z') {
        return true;
    }

    // An offset sign can only appear in the time part, after the `T`.
    timestamp
        .split_once('T')
        .is_some_and(|(_, time_part)| time_part.contains('+') || time_part.contains('-'))
}

/// Format a millisecond duration with hour/minute units only.
///
/// Uses compact suffixes and a space separator, no conjunction: `"2h 30m"`,
/// `"2h"`, `"45m"`. Sub-minute durations collapse to `"0m"`.
pub fn humanize_duration(millis: u64) -> String {
    let total_minutes = millis / 60_000;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, minutes) => format!("{minutes}m"),
        (hours, 0) => format!("{hours}h"),
        (hours, minutes) => format!("{hours}h {minutes}m"),
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test]
    fn treat_zoneless_timestamps_as_utc() {
        let spaced = parse_utc_datetime("2023-01-01 10:00:00").unwrap();
        let designated = parse_utc_datetime("2023-01-01T10:00:00Z").unwrap();

        assert_eq!(spaced, designated);
    }

    #[test]
    fn honor_explicit_offsets() {
        let offset = parse_utc_datetime("2023-01-01T12:00:00+02:00").unwrap();
        let utc = parse_utc_datetime("2023-01-01 10:00:00").unwrap();

        assert_eq!(offset, utc);
    }

    #[test]
    fn reject_garbage_timestamps() {
        assert!(matches!(
            parse_utc_datetime("not a date"),
            Err(AcademyError::DeserializationError(_))
        ));
    }

    #[test_case(9_000_000, "2h 30m" ; "hours and minutes")]
    #[test_case(7_200_000, "2h" ; "whole hours")]
    #[test_case(2_700_000, "45m" ; "minutes only")]
    #[test_case(59_000, "0m" ; "sub minute")]
    fn humanize_durations(millis: u64, expected: &str) {
        assert_eq!(humanize_duration(millis), expected);
    }
}
