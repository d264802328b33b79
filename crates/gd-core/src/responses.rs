//! Response shapes exchanged with collaborators.
//!
//! [`GoodDatesResult`] is produced by the upstream numerology service and is
//! only read here. [`CalendarEntry`] and [`PowerPeriod`] are what this layer
//! hands to the UI (and to `gdt`) after deriving them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::parse_calendar_date;
use crate::enums::Category;
use crate::errors::CoreError;

/// Response of the upstream `POST /good-dates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GoodDatesResult {
    pub dates: Vec<String>,
    pub numerology_number: i64,
    pub number_meaning: String,
    pub total_matches: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_sign: Option<ZodiacBlock>,
}

impl GoodDatesResult {
    /// Parse every entry of `dates`, failing on the first malformed one.
    pub fn parsed_dates(&self) -> Result<Vec<NaiveDate>, CoreError> {
        self.dates
            .iter()
            .map(|date| parse_calendar_date(date))
            .collect()
    }

    /// Advice for one date, if the zodiac block carries any.
    #[must_use]
    pub fn advice_for(&self, date: &str) -> Option<&DateAdvice> {
        self.zodiac_sign
            .as_ref()
            .and_then(|zodiac| zodiac.date_specific_advice.get(date))
    }
}

/// Zodiac block attached to a good-dates response when zodiac data was requested.
///
/// `element` stays a plain string: the upstream block is enrichment output and
/// is rendered as-is. Use `gd_core::Element::from_str` to classify it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ZodiacBlock {
    pub name: String,
    pub symbol: String,
    pub element: String,
    pub date_range: String,
    #[serde(default)]
    pub power_periods: Vec<PowerPeriod>,
    #[serde(default)]
    pub date_specific_advice: BTreeMap<String, DateAdvice>,
    #[serde(default)]
    pub career: Vec<String>,
    #[serde(default)]
    pub personal: Vec<String>,
    #[serde(default)]
    pub rest: Vec<String>,
    #[serde(default)]
    pub financial: Vec<String>,
}

impl ZodiacBlock {
    /// General recommendations listed under one category.
    #[must_use]
    pub fn recommendations(&self, category: Category) -> &[String] {
        match category {
            Category::Career => &self.career,
            Category::Personal => &self.personal,
            Category::Rest => &self.rest,
            Category::Financial => &self.financial,
        }
    }
}

/// Per-date advice. `category` is the closed key set, so a response that
/// names any other category is rejected during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DateAdvice {
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub timing: Option<String>,
    #[serde(default)]
    pub power_level: Option<i64>,
    #[serde(default)]
    pub category: Option<Category>,
}

/// A run of good dates separated by small gaps.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PowerPeriod {
    pub start_date: String,
    pub end_date: String,
    pub dates: Vec<String>,
    pub duration: u32,
}

/// Calendar descriptor for one good date, ready for a calendar grid.
///
/// `start`/`end` are `YYYY-MM-DD` for all-day entries and
/// `YYYY-MM-DDTHH:MM:SS` for time-bounded ones.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub background: Option<String>,
    pub text_color: String,
    pub all_day: bool,
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINIMAL: &str = r#"{
        "dates": ["2024-01-01", "2024-01-10"],
        "numerology_number": 7,
        "number_meaning": "Analysis, spirituality, and wisdom",
        "total_matches": 2
    }"#;

    #[test]
    fn minimal_response_has_no_zodiac_block() {
        let result: GoodDatesResult = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(result.dates.len(), 2);
        assert!(result.zodiac_sign.is_none());
        assert!(result.advice_for("2024-01-01").is_none());
    }

    #[test]
    fn parsed_dates_preserve_order() {
        let result: GoodDatesResult = serde_json::from_str(MINIMAL).unwrap();
        let dates = result.parsed_dates().unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            ]
        );
    }

    #[test]
    fn parsed_dates_reports_malformed_entry() {
        let mut result: GoodDatesResult = serde_json::from_str(MINIMAL).unwrap();
        result.dates.push("2024-13-01".into());
        let err = result.parsed_dates().unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { input, .. } if input == "2024-13-01"));
    }

    #[test]
    fn zodiac_block_collections_default_to_empty() {
        let block: ZodiacBlock = serde_json::from_str(
            r#"{"name":"Aries","symbol":"♈","element":"Fire","date_range":"March 21 - April 19"}"#,
        )
        .unwrap();
        assert!(block.power_periods.is_empty());
        assert!(block.date_specific_advice.is_empty());
        assert!(block.recommendations(Category::Rest).is_empty());
    }

    #[test]
    fn advice_with_null_fields_deserializes() {
        let advice: DateAdvice = serde_json::from_str(
            r#"{"activities":[],"timing":null,"power_level":null,"category":"rest"}"#,
        )
        .unwrap();
        assert_eq!(advice.category, Some(Category::Rest));
        assert!(advice.timing.is_none());
    }

    #[test]
    fn zodiac_sign_is_omitted_when_absent() {
        let result: GoodDatesResult = serde_json::from_str(MINIMAL).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("zodiac_sign").is_none());
    }
}
