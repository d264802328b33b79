//! Calendar view settings.

use gd_core::taxonomy::DEFAULT_ACCENT;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default maximum gap, in days, between dates in one power period.
const fn default_cluster_max_gap_days() -> u32 {
    3
}

fn default_color() -> String {
    DEFAULT_ACCENT.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// Largest day gap that still joins two good dates into one cluster.
    #[serde(default = "default_cluster_max_gap_days")]
    pub cluster_max_gap_days: u32,

    /// Color of uncategorized entries when no zodiac element is known.
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cluster_max_gap_days: default_cluster_max_gap_days(),
            default_color: default_color(),
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_hex_color(&self.default_color) {
            return Err(ConfigError::invalid(
                "calendar.default_color",
                format!("expected #rgb or #rrggbb, got '{}'", self.default_color),
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    })
}
