//! Calendar entries derived from a good-dates result.
//!
//! Each good date becomes one [`CalendarEntry`]. Dates with categorized
//! advice take the category's color and icon and, when the advice names a
//! recognizable time of day, that window's clock times. Everything else is an
//! all-day entry tinted with the zodiac element color.

use std::str::FromStr;

use chrono::NaiveDate;
use gd_core::responses::{CalendarEntry, GoodDatesResult};
use gd_core::taxonomy::{DEFAULT_ACCENT, category_color, element_color, time_slot};
use gd_core::{Element, TimeOfDay, parse_calendar_date};
use gd_zodiac::ZodiacSign;

use crate::error::CalendarError;
use crate::ics::CalendarExportEvent;

pub const GENERIC_TITLE: &str = "Good date";
pub const TEXT_COLOR: &str = "#ffffff";

/// Inputs to entry derivation that do not come from the upstream result.
#[derive(Debug, Clone)]
pub struct EntryOptions {
    /// Color for uncategorized entries when no element is known.
    pub default_color: String,
    /// Locally resolved sign, used when the result has no zodiac block.
    pub sign: Option<&'static ZodiacSign>,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_ACCENT.to_string(),
            sign: None,
        }
    }
}

/// Build one entry per good date, preserving the result's order.
pub fn build_entries(
    result: &GoodDatesResult,
    options: &EntryOptions,
) -> Result<Vec<CalendarEntry>, CalendarError> {
    let fallback_color = uncategorized_color(result, options);

    let entries = result
        .dates
        .iter()
        .map(|raw| build_entry(result, raw, &fallback_color))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        dates = result.dates.len(),
        categorized = entries.iter().filter(|e| e.category.is_some()).count(),
        "derived calendar entries"
    );
    Ok(entries)
}

fn build_entry(
    result: &GoodDatesResult,
    raw: &str,
    fallback_color: &str,
) -> Result<CalendarEntry, CalendarError> {
    let date = parse_entry_date("dates", raw)?;
    let key = date.format("%Y-%m-%d").to_string();
    let advice = result
        .advice_for(raw)
        .or_else(|| result.advice_for(&key));

    let Some((advice, category)) = advice.and_then(|a| a.category.map(|c| (a, c))) else {
        return Ok(CalendarEntry {
            id: entry_id(&key),
            title: GENERIC_TITLE.to_string(),
            start: key.clone(),
            end: key,
            color: fallback_color.to_string(),
            background: None,
            text_color: TEXT_COLOR.to_string(),
            all_day: true,
            category: None,
        });
    };

    let palette = category_color(category);
    let slot = advice.timing.as_deref().and_then(|hint| {
        let slot = TimeOfDay::from_timing(hint);
        if slot.is_none() {
            tracing::warn!(date = %key, hint, "unrecognized timing hint; using an all-day entry");
        }
        slot
    });

    let (start, end, all_day) = match slot {
        Some(slot) => {
            let window = time_slot(slot);
            (
                format!("{key}T{}:00", window.start),
                format!("{key}T{}:00", window.end),
                false,
            )
        }
        None => (key.clone(), key.clone(), true),
    };

    Ok(CalendarEntry {
        id: entry_id(&key),
        title: format!("{} {}", palette.icon, category.label()),
        start,
        end,
        color: palette.base.to_string(),
        background: Some(palette.bg.to_string()),
        text_color: TEXT_COLOR.to_string(),
        all_day,
        category: Some(category),
    })
}

/// Export event for one entry.
///
/// Timed entries keep their window. All-day entries run from midnight to the
/// following midnight. The description lists the number meaning followed by
/// the advice activities for that date, one per line.
pub fn export_event_for(
    entry: &CalendarEntry,
    result: &GoodDatesResult,
) -> Result<CalendarExportEvent, CalendarError> {
    let date = parse_entry_date("start", &entry.start)?;
    let key = date.format("%Y-%m-%d").to_string();

    let (start_date, end_date) = if entry.all_day {
        let next = date.succ_opt().ok_or_else(|| CalendarError::InvalidDate {
            field: "start",
            input: entry.start.clone(),
        })?;
        (key.clone(), next.format("%Y-%m-%d").to_string())
    } else {
        (entry.start.clone(), entry.end.clone())
    };

    let mut lines = vec![format!(
        "Numerology number {}: {}",
        result.numerology_number, result.number_meaning
    )];
    if let Some(advice) = result.advice_for(&key) {
        lines.extend(advice.activities.iter().cloned());
    }

    Ok(CalendarExportEvent {
        title: entry.title.clone(),
        description: lines.join("\n"),
        start_date,
        end_date,
    })
}

fn uncategorized_color(result: &GoodDatesResult, options: &EntryOptions) -> String {
    let upstream = result
        .zodiac_sign
        .as_ref()
        .and_then(|zodiac| Element::from_str(&zodiac.element).ok());
    let local = options.sign.map(|sign| sign.element);

    upstream
        .or(local)
        .map_or_else(|| options.default_color.clone(), |e| element_color(e).to_string())
}

fn parse_entry_date(field: &'static str, raw: &str) -> Result<NaiveDate, CalendarError> {
    parse_calendar_date(raw).map_err(|_| CalendarError::InvalidDate {
        field,
        input: raw.to_string(),
    })
}

fn entry_id(key: &str) -> String {
    format!("good-date-{key}")
}
