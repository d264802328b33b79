//! Single-event iCalendar encoder.
//!
//! Produces a minimal `VCALENDAR` document with one `VEVENT`. Every content
//! line is terminated by CRLF; calendar applications reject bare LF.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use gd_core::dates::parse_naive_date_time;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

pub const PRODUCT_ID: &str = "-//Good Dates//Calendar//EN";
pub const LINE_ENDING: &str = "\r\n";

/// Placeholder written in place of a `DTSTART`/`DTEND` value that could not
/// be parsed. Use [`try_encode`] to reject such events instead.
pub const INVALID_TIMESTAMP: &str = "INVALID";

/// One event to export. Dates are date-like strings: `YYYY-MM-DD`, a naive
/// date-time (taken as UTC), or RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarExportEvent {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl CalendarExportEvent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Check that both dates parse.
    pub fn validate(&self) -> Result<(), CalendarError> {
        for (field, value) in [("start_date", &self.start_date), ("end_date", &self.end_date)] {
            if to_utc(value).is_none() {
                return Err(CalendarError::InvalidDate {
                    field,
                    input: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Encode an event. Never fails: unparsable dates become [`INVALID_TIMESTAMP`].
#[must_use]
pub fn encode(event: &CalendarExportEvent) -> String {
    let start = ics_timestamp("start_date", &event.start_date);
    let end = ics_timestamp("end_date", &event.end_date);

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODUCT_ID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART:{start}"),
        format!("DTEND:{end}"),
        format!("SUMMARY:{}", event.title),
        format!("DESCRIPTION:{}", escape_newlines(&event.description)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut document = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        document.push_str(line);
        document.push_str(LINE_ENDING);
    }
    document
}

/// Validate the event's dates, then encode it.
pub fn try_encode(event: &CalendarExportEvent) -> Result<String, CalendarError> {
    event.validate()?;
    Ok(encode(event))
}

fn ics_timestamp(field: &'static str, value: &str) -> String {
    to_utc(value).map_or_else(
        || {
            tracing::warn!(field, value, "unparsable export date; writing placeholder");
            INVALID_TIMESTAMP.to_string()
        },
        |instant| instant.format("%Y%m%dT%H%M%SZ").to_string(),
    )
}

/// Interpret a date-like string as a UTC instant.
fn to_utc(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Some(naive) = parse_naive_date_time(trimmed) {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Replace every line break with the two-character sequence `\n`.
fn escape_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\\n")
}
