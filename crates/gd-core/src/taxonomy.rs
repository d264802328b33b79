//! Static lookup tables that drive coloring and grouping.
//!
//! The tables live for the whole process and have no mutation path. Every
//! lookup is keyed by a closed enum from [`crate::enums`], so there is no
//! unknown-key fallback to define.

use serde::Serialize;

use crate::enums::{Category, Element, TimeOfDay};

/// Accent used when no category or element is available.
pub const DEFAULT_ACCENT: &str = "#4f46e5";

/// Color, translucent background tint, and glyph for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryColor {
    pub base: &'static str,
    pub bg: &'static str,
    pub icon: &'static str,
}

/// Clock window for one time of day, as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: &'static str,
    pub end: &'static str,
}

const CAREER: CategoryColor = CategoryColor {
    base: "#4f46e5", // indigo-600
    bg: "rgba(79, 70, 229, 0.1)",
    icon: "💼",
};

const PERSONAL: CategoryColor = CategoryColor {
    base: "#0891b2", // cyan-600
    bg: "rgba(8, 145, 178, 0.1)",
    icon: "🌟",
};

const REST: CategoryColor = CategoryColor {
    base: "#059669", // emerald-600
    bg: "rgba(5, 150, 105, 0.1)",
    icon: "🌿",
};

const FINANCIAL: CategoryColor = CategoryColor {
    base: "#7c3aed", // violet-600
    bg: "rgba(124, 58, 237, 0.1)",
    icon: "💰",
};

const MORNING: TimeSlot = TimeSlot {
    start: "09:00",
    end: "12:00",
};
const AFTERNOON: TimeSlot = TimeSlot {
    start: "13:00",
    end: "16:00",
};
const EVENING: TimeSlot = TimeSlot {
    start: "17:00",
    end: "20:00",
};
const NIGHT: TimeSlot = TimeSlot {
    start: "20:00",
    end: "23:00",
};

/// Hex color for an element.
#[must_use]
pub const fn element_color(element: Element) -> &'static str {
    match element {
        Element::Fire => "#ef4444",  // red-500
        Element::Earth => "#10b981", // emerald-500
        Element::Air => "#3b82f6",   // blue-500
        Element::Water => "#0ea5e9", // sky-500
    }
}

#[must_use]
pub const fn category_color(category: Category) -> &'static CategoryColor {
    match category {
        Category::Career => &CAREER,
        Category::Personal => &PERSONAL,
        Category::Rest => &REST,
        Category::Financial => &FINANCIAL,
    }
}

#[must_use]
pub const fn time_slot(slot: TimeOfDay) -> &'static TimeSlot {
    match slot {
        TimeOfDay::Morning => &MORNING,
        TimeOfDay::Afternoon => &AFTERNOON,
        TimeOfDay::Evening => &EVENING,
        TimeOfDay::Night => &NIGHT,
    }
}

/// Snapshot of all three tables, keyed by their canonical string keys.
///
/// Used by consumers that render legends and by `gdt taxonomy`.
#[derive(Debug, Clone, Serialize)]
pub struct TaxonomySnapshot {
    pub elements: Vec<(&'static str, &'static str)>,
    pub categories: Vec<(&'static str, CategoryColor)>,
    pub time_slots: Vec<(&'static str, TimeSlot)>,
}

#[must_use]
pub fn snapshot() -> TaxonomySnapshot {
    TaxonomySnapshot {
        elements: Element::ALL
            .into_iter()
            .map(|element| (element.as_str(), element_color(element)))
            .collect(),
        categories: Category::ALL
            .into_iter()
            .map(|category| (category.as_str(), *category_color(category)))
            .collect(),
        time_slots: TimeOfDay::ALL
            .into_iter()
            .map(|slot| (slot.as_str(), *time_slot(slot)))
            .collect(),
    }
}
