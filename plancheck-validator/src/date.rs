//! Date recognition for heterogeneous CSV exports.
//!
//! Real-world exports mix ISO and US conventions, with and without zero
//! padding. The recognizer tries a fixed, ordered format list and never
//! accepts a partial match.

use chrono::NaiveDate;

use crate::rules::DATE_FORMATS;

/// Outcome of running a raw cell value through the date recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// The trimmed value was empty. Optional-field semantics: valid, no date.
    Absent,
    /// The value parsed fully under one of the accepted formats.
    Valid(NaiveDate),
    /// No accepted format matched.
    Invalid,
}

impl DateCheck {
    /// Whether the value is acceptable (`Absent` counts as acceptable).
    #[must_use]
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Decide whether `raw` denotes a calendar date under the accepted formats.
///
/// Formats are tried strictly in the order of [`DATE_FORMATS`]; the first
/// one that consumes the whole trimmed string wins. Pure function, no side
/// effects.
#[must_use]
pub fn recognize(raw: &str) -> DateCheck {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DateCheck::Absent;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return DateCheck::Valid(date);
        }
    }

    DateCheck::Invalid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_are_absent() {
        assert_eq!(recognize(""), DateCheck::Absent);
        assert_eq!(recognize("   "), DateCheck::Absent);
        assert_eq!(recognize("\t\n"), DateCheck::Absent);
        assert!(recognize("").is_valid());
    }

    #[test]
    fn test_each_accepted_format_parses() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        // ISO, slash padded, dash unpadded, slash unpadded
        assert_eq!(recognize("2025-06-01"), DateCheck::Valid(expected));
        assert_eq!(recognize("06/01/2025"), DateCheck::Valid(expected));
        assert_eq!(recognize("6-1-2025"), DateCheck::Valid(expected));
        assert_eq!(recognize("6/1/2025"), DateCheck::Valid(expected));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(recognize("  2025-06-01  "), DateCheck::Valid(expected));
    }

    #[test]
    fn test_out_of_range_components_are_invalid() {
        assert_eq!(recognize("2025-13-40"), DateCheck::Invalid);
        assert_eq!(recognize("13/45/2025"), DateCheck::Invalid);
    }

    #[test]
    fn test_non_dates_are_invalid() {
        assert_eq!(recognize("not a date"), DateCheck::Invalid);
        assert_eq!(recognize("June 1, 2025"), DateCheck::Invalid);
    }

    #[test]
    fn test_partial_matches_are_rejected() {
        // Trailing time-of-day or timezone must not be accepted.
        assert_eq!(recognize("2025-06-01 00:00"), DateCheck::Invalid);
        assert_eq!(recognize("2025-06-01T00:00:00Z"), DateCheck::Invalid);
        assert_eq!(recognize("2025-06-01x"), DateCheck::Invalid);
    }
}
