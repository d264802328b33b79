//! The twelve zodiac sign records.

use std::fmt;
use std::str::FromStr;

use gd_core::{CoreError, Element};
use serde::Serialize;

/// Closed key set of the twelve signs, in zodiac order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignKind {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl SignKind {
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Canonical lowercase key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// First and last `(month, day)` of the sign's window, both inclusive.
    ///
    /// Capricorn's window starts in December and ends in January.
    #[must_use]
    pub const fn window(self) -> ((u32, u32), (u32, u32)) {
        match self {
            Self::Aries => ((3, 21), (4, 19)),
            Self::Taurus => ((4, 20), (5, 20)),
            Self::Gemini => ((5, 21), (6, 20)),
            Self::Cancer => ((6, 21), (7, 22)),
            Self::Leo => ((7, 23), (8, 22)),
            Self::Virgo => ((8, 23), (9, 22)),
            Self::Libra => ((9, 23), (10, 22)),
            Self::Scorpio => ((10, 23), (11, 21)),
            Self::Sagittarius => ((11, 22), (12, 21)),
            Self::Capricorn => ((12, 22), (1, 19)),
            Self::Aquarius => ((1, 20), (2, 18)),
            Self::Pisces => ((2, 19), (3, 20)),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownKey {
                kind: "zodiac sign",
                key: s.to_string(),
            })
    }
}

/// Static description of one sign.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    #[serde(rename = "key")]
    pub kind: SignKind,
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub date_range: &'static str,
    pub traits: &'static [&'static str],
    pub favorable_activities: &'static [&'static str],
}

/// Records indexed by `SignKind as usize`.
static SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        kind: SignKind::Aries,
        name: "Aries",
        symbol: "♈",
        element: Element::Fire,
        date_range: "March 21 - April 19",
        traits: &["Leadership", "Energy", "Adventure"],
        favorable_activities: &[
            "Starting new projects",
            "Physical activities",
            "Competitive events",
        ],
    },
    ZodiacSign {
        kind: SignKind::Taurus,
        name: "Taurus",
        symbol: "♉",
        element: Element::Earth,
        date_range: "April 20 - May 20",
        traits: &["Stability", "Patience", "Determination"],
        favorable_activities: &["Financial planning", "Creative work", "Nature activities"],
    },
    ZodiacSign {
        kind: SignKind::Gemini,
        name: "Gemini",
        symbol: "♊",
        element: Element::Air,
        date_range: "May 21 - June 20",
        traits: &["Adaptability", "Communication", "Curiosity"],
        favorable_activities: &["Learning", "Social events", "Writing"],
    },
    ZodiacSign {
        kind: SignKind::Cancer,
        name: "Cancer",
        symbol: "♋",
        element: Element::Water,
        date_range: "June 21 - July 22",
        traits: &["Intuition", "Nurturing", "Emotional depth"],
        favorable_activities: &["Family gatherings", "Home improvement", "Self-care"],
    },
    ZodiacSign {
        kind: SignKind::Leo,
        name: "Leo",
        symbol: "♌",
        element: Element::Fire,
        date_range: "July 23 - August 22",
        traits: &["Confidence", "Creativity", "Generosity"],
        favorable_activities: &["Performance", "Leadership roles", "Creative expression"],
    },
    ZodiacSign {
        kind: SignKind::Virgo,
        name: "Virgo",
        symbol: "♍",
        element: Element::Earth,
        date_range: "August 23 - September 22",
        traits: &["Analysis", "Practicality", "Service"],
        favorable_activities: &["Organization", "Health routines", "Problem-solving"],
    },
    ZodiacSign {
        kind: SignKind::Libra,
        name: "Libra",
        symbol: "♎",
        element: Element::Air,
        date_range: "September 23 - October 22",
        traits: &["Balance", "Harmony", "Justice"],
        favorable_activities: &["Negotiations", "Art appreciation", "Social harmony"],
    },
    ZodiacSign {
        kind: SignKind::Scorpio,
        name: "Scorpio",
        symbol: "♏",
        element: Element::Water,
        date_range: "October 23 - November 21",
        traits: &["Intensity", "Passion", "Investigation"],
        favorable_activities: &["Research", "Transformation", "Deep connections"],
    },
    ZodiacSign {
        kind: SignKind::Sagittarius,
        name: "Sagittarius",
        symbol: "♐",
        element: Element::Fire,
        date_range: "November 22 - December 21",
        traits: &["Optimism", "Adventure", "Philosophy"],
        favorable_activities: &["Travel", "Learning", "Sports"],
    },
    ZodiacSign {
        kind: SignKind::Capricorn,
        name: "Capricorn",
        symbol: "♑",
        element: Element::Earth,
        date_range: "December 22 - January 19",
        traits: &["Ambition", "Discipline", "Responsibility"],
        favorable_activities: &["Career planning", "Goal setting", "Business"],
    },
    ZodiacSign {
        kind: SignKind::Aquarius,
        name: "Aquarius",
        symbol: "♒",
        element: Element::Air,
        date_range: "January 20 - February 18",
        traits: &["Innovation", "Humanitarianism", "Independence"],
        favorable_activities: &["Networking", "Technology", "Social causes"],
    },
    ZodiacSign {
        kind: SignKind::Pisces,
        name: "Pisces",
        symbol: "♓",
        element: Element::Water,
        date_range: "February 19 - March 20",
        traits: &["Intuition", "Creativity", "Compassion"],
        favorable_activities: &["Artistic pursuits", "Meditation", "Helping others"],
    },
];

/// Record for a sign.
#[must_use]
pub fn sign(kind: SignKind) -> &'static ZodiacSign {
    &SIGNS[kind.index()]
}

/// Look a record up by its canonical lowercase key (`"aries"`, ...).
#[must_use]
pub fn by_key(key: &str) -> Option<&'static ZodiacSign> {
    key.parse::<SignKind>().ok().map(sign)
}

/// All twelve records in zodiac order.
#[must_use]
pub fn all() -> &'static [ZodiacSign; 12] {
    &SIGNS
}
