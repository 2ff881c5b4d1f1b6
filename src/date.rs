// Dates arrive as ISO strings from the intake UI and print as MM/DD/YYYY.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::AppError;

const PRINT_FORMAT: &str = "%m/%d/%Y";

/// Parses an ISO calendar date. Accepts `YYYY-MM-DD`, an RFC 3339 timestamp,
/// or a local `YYYY-MM-DDTHH:MM[:SS]` timestamp; the calendar date is the
/// one written in the string, never shifted through a time zone.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    let s = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(s) {
        return Ok(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|stamp| stamp.date())
        .ok_or_else(|| AppError::DateError(input.to_string()))
}

/// Formats an optional ISO date for print.
///
/// `None`, empty and whitespace-only input yield `Ok(None)` so the caller
/// draws nothing. Anything else must parse.
pub fn format_date(input: Option<&str>) -> Result<Option<String>, AppError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(|date| Some(date.format(PRINT_FORMAT).to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_prints_month_first() {
        assert_eq!(format_date(Some("2024-01-15")).unwrap().as_deref(), Some("01/15/2024"));
        assert_eq!(format_date(Some("1985-12-03")).unwrap().as_deref(), Some("12/03/1985"));
    }

    #[test]
    fn blank_is_not_an_error() {
        assert_eq!(format_date(None).unwrap(), None);
        assert_eq!(format_date(Some("")).unwrap(), None);
        assert_eq!(format_date(Some("   ")).unwrap(), None);
    }

    #[test]
    fn timestamps_keep_their_written_date() {
        assert_eq!(
            format_date(Some("2024-10-14T23:30:00-05:00")).unwrap().as_deref(),
            Some("10/14/2024")
        );
        assert_eq!(
            format_date(Some("2024-10-14T08:15")).unwrap().as_deref(),
            Some("10/14/2024")
        );
    }

    #[test]
    fn malformed_dates_fail_fast() {
        for bad in ["not-a-date", "2024-02-30", "01/15/2024", "2024-13-01"] {
            match format_date(Some(bad)) {
                Err(AppError::DateError(input)) => assert_eq!(input, bad),
                other => panic!("expected DateError for {bad:?}, got {other:?}"),
            }
        }
    }
}
