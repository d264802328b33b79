//! Error types for the gd-calendar crate.

use gd_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    /// A date-like field could not be parsed.
    #[error("Invalid date in '{field}': '{input}'")]
    InvalidDate { field: &'static str, input: String },

    /// A formatting style name is not one of the supported values.
    #[error("Unknown {kind} style '{value}' (expected one of: {expected})")]
    UnknownStyle {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The export file name is empty or names a path instead of a file.
    #[error("Invalid export file name '{filename}': expected a plain file name")]
    InvalidFilename { filename: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing the export file failed.
    #[error("Failed to write calendar export: {0}")]
    Io(#[from] std::io::Error),
}
