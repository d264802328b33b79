//! Closed key sets for elements, life categories, and time-of-day windows.
//!
//! Each enum is the only way to address its taxonomy table, so lookups are
//! total. Strings coming from the upstream service or the command line are
//! converted through `FromStr`, which rejects keys outside the set.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Classical element governing a zodiac sign.
///
/// Serialized with its capitalized name (`"Fire"`), matching the upstream
/// zodiac block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Self; 4] = [Self::Fire, Self::Earth, Self::Air, Self::Water];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|element| element.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey {
                kind: "element",
                key: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Life category a good date is recommended for.
///
/// The key set is shared by every feature that classifies a date: calendar
/// coloring, recommendation panels, and the upstream `date_specific_advice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Career,
    Personal,
    Rest,
    Financial,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Career, Self::Personal, Self::Rest, Self::Financial];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Personal => "personal",
            Self::Rest => "rest",
            Self::Financial => "financial",
        }
    }

    /// Human-readable label used in calendar entry titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Personal => "Personal",
            Self::Rest => "Rest",
            Self::Financial => "Financial",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey {
                kind: "category",
                key: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// TimeOfDay
// ---------------------------------------------------------------------------

/// Named window within a day, in chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Map a free-form timing hint from the upstream advice onto a window.
    ///
    /// Hints are phrases such as `"early morning"`, `"noon"` or `"dusk"`.
    /// Returns `None` when nothing recognizable is mentioned.
    #[must_use]
    pub fn from_timing(hint: &str) -> Option<Self> {
        let hint = hint.to_ascii_lowercase();
        if hint.contains("morning") || hint.contains("dawn") {
            Some(Self::Morning)
        } else if hint.contains("noon") {
            // also matches "afternoon"
            Some(Self::Afternoon)
        } else if hint.contains("evening") || hint.contains("dusk") {
            Some(Self::Evening)
        } else if hint.contains("night") {
            Some(Self::Night)
        } else {
            None
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey {
                kind: "time of day",
                key: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(element_fire, Element, Element::Fire, "Fire");
    test_serde_roundtrip!(element_water, Element, Element::Water, "Water");
    test_serde_roundtrip!(category_career, Category, Category::Career, "career");
    test_serde_roundtrip!(
        category_financial,
        Category,
        Category::Financial,
        "financial"
    );
    test_serde_roundtrip!(time_evening, TimeOfDay, TimeOfDay::Evening, "evening");

    #[test]
    fn display_matches_as_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
        }
        for element in Element::ALL {
            assert_eq!(element.to_string(), element.as_str());
        }
        for slot in TimeOfDay::ALL {
            assert_eq!(slot.to_string(), slot.as_str());
        }
    }

    #[test]
    fn from_str_accepts_every_canonical_key() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        for element in Element::ALL {
            assert_eq!(element.as_str().parse::<Element>().unwrap(), element);
        }
        for slot in TimeOfDay::ALL {
            assert_eq!(slot.as_str().parse::<TimeOfDay>().unwrap(), slot);
        }
    }

    #[test]
    fn from_str_rejects_unknown_keys() {
        let err = "leisure".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownKey {
                kind: "category",
                key: "leisure".into()
            }
        );
        assert!("fire".parse::<Element>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn unknown_category_fails_to_deserialize() {
        let parsed: Result<Category, _> = serde_json::from_str("\"leisure\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn timing_hints_map_to_windows() {
        assert_eq!(TimeOfDay::from_timing("morning"), Some(TimeOfDay::Morning));
        assert_eq!(
            TimeOfDay::from_timing("early morning"),
            Some(TimeOfDay::Morning)
        );
        assert_eq!(
            TimeOfDay::from_timing("mid-morning"),
            Some(TimeOfDay::Morning)
        );
        assert_eq!(TimeOfDay::from_timing("Dawn"), Some(TimeOfDay::Morning));
        assert_eq!(TimeOfDay::from_timing("noon"), Some(TimeOfDay::Afternoon));
        assert_eq!(
            TimeOfDay::from_timing("afternoon"),
            Some(TimeOfDay::Afternoon)
        );
        assert_eq!(TimeOfDay::from_timing("dusk"), Some(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::from_timing("evening"), Some(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::from_timing("late night"), Some(TimeOfDay::Night));
        assert_eq!(TimeOfDay::from_timing("whenever"), None);
    }

    #[test]
    fn time_of_day_orders_chronologically() {
        let mut shuffled = [
            TimeOfDay::Night,
            TimeOfDay::Morning,
            TimeOfDay::Evening,
            TimeOfDay::Afternoon,
        ];
        shuffled.sort();
        assert_eq!(shuffled, TimeOfDay::ALL);
    }
}
