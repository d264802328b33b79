//! Cross-cutting error types for Good Dates.
//!
//! Domain-specific errors (e.g., `CalendarError`, `ConfigError`) are defined in
//! their respective crates. The CLI converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Good Dates crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A string key fell outside one of the closed taxonomy key sets.
    #[error("Unknown {kind} key: '{key}'")]
    UnknownKey { kind: &'static str, key: String },

    /// A date-like string could not be parsed as a calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// A (month, day) pair does not exist in the leap-year calendar.
    #[error("Invalid month/day: {month:02}-{day:02}")]
    InvalidMonthDay { month: u32, day: u32 },
}
