//! Short display labels for dates, rendered with fixed en-US conventions.
//!
//! Each field (month, day, year, weekday, hour, minute) is toggled
//! independently. The default shows a short month name and a numeric day,
//! e.g. `"Apr 20"`.
//!
//! ```text
//! month short/long/narrow  ->  Sat, Apr 20, 2024
//! month numeric/2-digit    ->  Sat, 4/20/2024
//! hour + minute            ->  10:05 AM
//! date + time              ->  Apr 20, 10:05 AM
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use gd_core::dates::parse_naive_date_time;

use crate::error::CalendarError;

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Numeric,
    TwoDigit,
    Short,
    Long,
    Narrow,
}

impl MonthStyle {
    pub const ALL: [Self; 5] = [
        Self::Numeric,
        Self::TwoDigit,
        Self::Short,
        Self::Long,
        Self::Narrow,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::TwoDigit => "2-digit",
            Self::Short => "short",
            Self::Long => "long",
            Self::Narrow => "narrow",
        }
    }

    const fn is_textual(self) -> bool {
        matches!(self, Self::Short | Self::Long | Self::Narrow)
    }

    fn render(self, value: NaiveDateTime) -> String {
        match self {
            Self::Numeric => strftime(value, "%-m"),
            Self::TwoDigit => strftime(value, "%m"),
            Self::Short => strftime(value, "%b"),
            Self::Long => strftime(value, "%B"),
            Self::Narrow => first_letter(&strftime(value, "%B")),
        }
    }
}

/// Style for fields that are always numbers (day, year, hour, minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericStyle {
    Numeric,
    TwoDigit,
}

impl NumericStyle {
    pub const ALL: [Self; 2] = [Self::Numeric, Self::TwoDigit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::TwoDigit => "2-digit",
        }
    }

    fn render(self, value: NaiveDateTime, numeric: &str, two_digit: &str) -> String {
        match self {
            Self::Numeric => strftime(value, numeric),
            Self::TwoDigit => strftime(value, two_digit),
        }
    }
}

/// Style for the weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Short,
    Long,
    Narrow,
}

impl TextStyle {
    pub const ALL: [Self; 3] = [Self::Short, Self::Long, Self::Narrow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Narrow => "narrow",
        }
    }

    fn render(self, value: NaiveDateTime) -> String {
        match self {
            Self::Short => strftime(value, "%a"),
            Self::Long => strftime(value, "%A"),
            Self::Narrow => first_letter(&strftime(value, "%A")),
        }
    }
}

macro_rules! impl_style_str {
    ($ty:ty, $kind:literal, $expected:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CalendarError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|style| style.as_str() == s)
                    .ok_or_else(|| CalendarError::UnknownStyle {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $expected,
                    })
            }
        }
    };
}

impl_style_str!(MonthStyle, "month", "numeric, 2-digit, short, long, narrow");
impl_style_str!(NumericStyle, "numeric", "numeric, 2-digit");
impl_style_str!(TextStyle, "weekday", "short, long, narrow");

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Which fields to render and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub month: Option<MonthStyle>,
    pub day: Option<NumericStyle>,
    pub year: Option<NumericStyle>,
    pub weekday: Option<TextStyle>,
    pub hour: Option<NumericStyle>,
    pub minute: Option<NumericStyle>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            month: Some(MonthStyle::Short),
            day: Some(NumericStyle::Numeric),
            ..Self::empty()
        }
    }
}

impl FormatOptions {
    /// Rendering used when no field is selected at all: `4/20/2024`.
    const NUMERIC_DATE: Self = Self {
        month: Some(MonthStyle::Numeric),
        day: Some(NumericStyle::Numeric),
        year: Some(NumericStyle::Numeric),
        weekday: None,
        hour: None,
        minute: None,
    };

    /// No fields selected.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            month: None,
            day: None,
            year: None,
            weekday: None,
            hour: None,
            minute: None,
        }
    }

    #[must_use]
    pub const fn with_month(mut self, style: MonthStyle) -> Self {
        self.month = Some(style);
        self
    }

    #[must_use]
    pub const fn with_day(mut self, style: NumericStyle) -> Self {
        self.day = Some(style);
        self
    }

    #[must_use]
    pub const fn with_year(mut self, style: NumericStyle) -> Self {
        self.year = Some(style);
        self
    }

    #[must_use]
    pub const fn with_weekday(mut self, style: TextStyle) -> Self {
        self.weekday = Some(style);
        self
    }

    #[must_use]
    pub const fn with_hour(mut self, style: NumericStyle) -> Self {
        self.hour = Some(style);
        self
    }

    #[must_use]
    pub const fn with_minute(mut self, style: NumericStyle) -> Self {
        self.minute = Some(style);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.month.is_none()
            && self.day.is_none()
            && self.year.is_none()
            && self.weekday.is_none()
            && self.hour.is_none()
            && self.minute.is_none()
    }
}

// ---------------------------------------------------------------------------
// Date values
// ---------------------------------------------------------------------------

/// A calendar date or a wall-clock date-time to be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateValue {
    /// Parse a date-like string.
    ///
    /// `YYYY-MM-DD` stays a calendar date. RFC 3339 values are converted to
    /// UTC. Naive date-times are kept as written.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let trimmed = input.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::DateTime(date_time.naive_utc()));
        }
        parse_naive_date_time(trimmed)
            .map(Self::DateTime)
            .ok_or_else(|| CalendarError::InvalidDate {
                field: "date",
                input: input.to_string(),
            })
    }

    fn naive(self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(date_time) => date_time,
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::DateTime(date_time)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self::DateTime(date_time.naive_utc())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a date with the selected fields.
#[must_use]
pub fn format_date(date: impl Into<DateValue>, options: &FormatOptions) -> String {
    let value = date.into().naive();
    let options = if options.is_empty() {
        &FormatOptions::NUMERIC_DATE
    } else {
        options
    };

    let date_part = render_date(value, options);
    let time_part = render_time(value, options);
    match (date_part.is_empty(), time_part.is_empty()) {
        (_, true) => date_part,
        (true, false) => time_part,
        (false, false) => format!("{date_part}, {time_part}"),
    }
}

/// Parse a date-like string and render it.
pub fn format_date_str(input: &str, options: &FormatOptions) -> Result<String, CalendarError> {
    DateValue::parse(input).map(|value| format_date(value, options))
}

fn render_date(value: NaiveDateTime, options: &FormatOptions) -> String {
    let day = options.day.map(|style| style.render(value, "%-d", "%d"));
    let year = options.year.map(|style| style.render(value, "%Y", "%y"));

    let body = match options.month {
        Some(style) if style.is_textual() => textual_date(style.render(value), day, year),
        month => [month.map(|style| style.render(value)), day, year]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("/"),
    };

    match options.weekday.map(|style| style.render(value)) {
        Some(weekday) if body.is_empty() => weekday,
        Some(weekday) => format!("{weekday}, {body}"),
        None => body,
    }
}

fn textual_date(month: String, day: Option<String>, year: Option<String>) -> String {
    match (day, year) {
        (Some(day), Some(year)) => format!("{month} {day}, {year}"),
        (Some(day), None) => format!("{month} {day}"),
        (None, Some(year)) => format!("{month} {year}"),
        (None, None) => month,
    }
}

fn render_time(value: NaiveDateTime, options: &FormatOptions) -> String {
    match (options.hour, options.minute) {
        (Some(hour), minute) => {
            let hour = hour.render(value, "%-I", "%I");
            let minute = minute.map_or_else(String::new, |_| strftime(value, ":%M"));
            format!("{hour}{minute} {}", strftime(value, "%p"))
        }
        (None, Some(minute)) => minute.render(value, "%-M", "%M"),
        (None, None) => String::new(),
    }
}

fn strftime(value: NaiveDateTime, spec: &str) -> String {
    value.format(spec).to_string()
}

fn first_letter(text: &str) -> String {
    text.chars().next().map(String::from).unwrap_or_default()
}
