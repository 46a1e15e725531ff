//! # Temporal Parsing — Calendar Dates
//!
//! License dates are calendar dates in unambiguous year-month-day form
//! (`YYYY-MM-DD`); they carry no time component and no timezone. Two
//! parsers cover the two ingestion paths:
//!
//! - [`parse_date`] — strict; a malformed string is a [`ValidationError`].
//!   Used wherever a human typed the date (API requests, CLI flags).
//! - [`parse_date_lenient`] — degrades to `None` instead of failing, and
//!   tolerates a trailing time-of-day component. Used by bulk import, where
//!   one bad cell must never abort the whole file.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// The textual form of all calendar dates in the system.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date string strictly.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] if the string does not parse.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Parse a date leniently: unparseable values become `None`, not errors.
///
/// Accepts `YYYY-MM-DD` with an optional trailing time component (exported
/// spreadsheets frequently serialize dates as `2023-01-01 00:00:00`). Blank
/// cells and placeholder strings like `NaT` or `None` fall out naturally as
/// `None`.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Keep only the date portion if a time-of-day follows.
    let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_accepts_iso_dates() {
        let date = parse_date("2023-01-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn strict_parse_trims_whitespace() {
        assert!(parse_date(" 2023-06-15 ").is_ok());
    }

    #[test]
    fn strict_parse_rejects_other_formats() {
        assert!(parse_date("01/02/2023").is_err());
        assert!(parse_date("2023-13-01").is_err());
        assert!(parse_date("2023-02-30").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn lenient_parse_accepts_plain_dates() {
        assert_eq!(
            parse_date_lenient("2023-01-01"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn lenient_parse_drops_time_component() {
        assert_eq!(
            parse_date_lenient("2023-01-01 00:00:00"),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn lenient_parse_degrades_to_none() {
        assert_eq!(parse_date_lenient(""), None);
        assert_eq!(parse_date_lenient("   "), None);
        assert_eq!(parse_date_lenient("NaT"), None);
        assert_eq!(parse_date_lenient("None"), None);
        assert_eq!(parse_date_lenient("31/12/2023"), None);
    }
}
