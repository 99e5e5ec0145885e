//! Calendar-date parsing and formatting for stored profile dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// Date-only forms, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%m/%d/%Y"];

/// Timestamps without an offset, as produced by `datetime-local` inputs.
/// They are read as UTC.
const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a stored date value into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `January 15, 1990`, `01/15/1990`, an ISO timestamp
/// without an offset, or an RFC 3339 timestamp. Timestamps with an offset are
/// converted to UTC before the date is taken, so `1990-01-15T23:30:00-05:00`
/// yields `1990-01-16`.
pub fn parse_calendar_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
    {
        return Ok(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc).date_naive());
    }

    if let Some(ts) = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(ts.date());
    }

    Err(Error::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Format a date for display, e.g. `Mon Jan 15 1990`.
pub fn human_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Format a date in ISO calendar form, e.g. `1990-01-15`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_date() {
        let date = parse_calendar_date("birthday", "1990-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 1, 15).unwrap());
    }

    #[test]
    fn parses_rfc3339_in_utc() {
        let date = parse_calendar_date("birthday", "1990-01-15T23:30:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1990, 1, 16).unwrap());

        let date = parse_calendar_date("updatedAt", "2024-06-01T08:00:00.123456Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn parses_other_common_forms() {
        let expected = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
        for value in [
            "1990-01-15T00:00:00",
            "1990-01-15T00:00:00.000",
            "1990-01-15T18:45",
            "January 15, 1990",
            "Jan 15, 1990",
            "01/15/1990",
        ] {
            assert_eq!(parse_calendar_date("birthday", value).unwrap(), expected, "{value}");
        }
    }

    #[test]
    fn trims_before_parsing() {
        assert!(parse_calendar_date("birthday", "  2001-02-03 ").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_calendar_date("birthday", "sometime in May").unwrap_err();
        assert!(matches!(err, Error::InvalidDate { field: "birthday", .. }));
    }

    #[test]
    fn rejects_impossible_date() {
        assert!(parse_calendar_date("birthday", "2023-02-30").is_err());
    }

    #[test]
    fn human_date_format() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 15).unwrap();
        assert_eq!(human_date(date), "Mon Jan 15 1990");

        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(human_date(date), "Tue Mar 05 2024");
    }

    #[test]
    fn iso_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(iso_date(date), "2024-03-05");
    }
}
