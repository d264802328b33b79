//! Birth-date to sign resolution.

use chrono::{Datelike, NaiveDate};
use gd_core::{CoreError, parse_calendar_date};

use crate::signs::{SignKind, ZodiacSign, sign};

/// Days per month in a leap year; February 29 is a valid birth date.
const LEAP_YEAR_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Sign governing a validated `(month, day)` pair.
///
/// Both bounds of every window are inclusive. The pair is packed as
/// `month * 100 + day`, which orders exactly like a zero-padded `MM-DD`
/// string within one year.
#[must_use]
pub const fn sign_kind_for(month: u32, day: u32) -> SignKind {
    match month * 100 + day {
        321..=419 => SignKind::Aries,
        420..=520 => SignKind::Taurus,
        521..=620 => SignKind::Gemini,
        621..=722 => SignKind::Cancer,
        723..=822 => SignKind::Leo,
        823..=922 => SignKind::Virgo,
        923..=1022 => SignKind::Libra,
        1023..=1121 => SignKind::Scorpio,
        1122..=1221 => SignKind::Sagittarius,
        // wraps the year end: on or after Dec 22 OR on or before Jan 19
        1222..=1231 | 101..=119 => SignKind::Capricorn,
        120..=218 => SignKind::Aquarius,
        // 02-19..=03-20, reached only after every window above missed
        _ => SignKind::Pisces,
    }
}

/// Sign for a calendar date. Uses only the date's month and day fields.
#[must_use]
pub fn resolve(date: NaiveDate) -> &'static ZodiacSign {
    sign(sign_kind_for(date.month(), date.day()))
}

/// Sign for a `(month, day)` pair, validated against the leap-year calendar.
pub fn resolve_month_day(month: u32, day: u32) -> Result<&'static ZodiacSign, CoreError> {
    let valid = (1..=12).contains(&month)
        && day >= 1
        && day <= LEAP_YEAR_DAYS[(month - 1) as usize];
    if !valid {
        return Err(CoreError::InvalidMonthDay { month, day });
    }
    Ok(sign(sign_kind_for(month, day)))
}

/// Sign for any date-like string (`YYYY-MM-DD`, ISO date-time, RFC 3339).
pub fn resolve_str(input: &str) -> Result<&'static ZodiacSign, CoreError> {
    let date = parse_calendar_date(input)?;
    let record = resolve(date);
    tracing::debug!(%date, sign = %record.kind, "resolved zodiac sign");
    Ok(record)
}
