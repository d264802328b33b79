//! Parsing of date-like strings shared by the resolver and the calendar crate.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::CoreError;

/// Accepted naive date-time layouts, tried in order.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a date-like string into the calendar date it names.
///
/// Accepts `YYYY-MM-DD`, naive date-times (`YYYY-MM-DDTHH:MM[:SS[.fff]]`) and
/// RFC 3339 date-times. The date is read from the string's own fields: an
/// offset is never applied, so `2024-04-20T23:30:00-05:00` is April 20.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date_time.date_naive());
    }
    parse_naive_date_time(trimmed)
        .map(|date_time| date_time.date())
        .ok_or_else(|| CoreError::InvalidDate {
            input: input.to_string(),
            reason: "expected YYYY-MM-DD or an ISO-8601 date-time".into(),
        })
}

/// Parse a naive (offset-free) date-time in one of the accepted layouts.
#[must_use]
pub fn parse_naive_date_time(input: &str) -> Option<NaiveDateTime> {
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}
