//! # gd-calendar
//!
//! Turns a good-dates result into calendar artifacts.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `format` | en-US short date labels with independently toggled fields |
//! | `ics` | Single-event iCalendar (`VCALENDAR`) encoder |
//! | `export` | `.ics` file payload and scoped file save |
//! | `entries` | Category-colored, time-bounded calendar entries |
//! | `cluster` | Grouping of nearby good dates into power periods |
//! | `error` | Error types |
//!
//! ## Quick Start
//!
//! ```
//! use gd_calendar::{CalendarExportEvent, FormatOptions, encode, format_date_str};
//!
//! assert_eq!(format_date_str("2024-04-20", &FormatOptions::default()).unwrap(), "Apr 20");
//!
//! let event = CalendarExportEvent::new(
//!     "T",
//!     "line1\nline2",
//!     "2024-01-01T10:00:00Z",
//!     "2024-01-01T11:00:00Z",
//! );
//! assert!(encode(&event).contains("DTSTART:20240101T100000Z\r\n"));
//! ```

pub mod cluster;
pub mod entries;
pub mod error;
pub mod export;
pub mod format;
pub mod ics;

pub use cluster::{DEFAULT_MAX_GAP_DAYS, clusters_for, find_clusters};
pub use entries::{EntryOptions, build_entries, export_event_for};
pub use error::CalendarError;
pub use export::{EXPORT_FILENAME, EXPORT_MIME_TYPE, ExportFile};
pub use format::{
    DateValue, FormatOptions, MonthStyle, NumericStyle, TextStyle, format_date, format_date_str,
};
pub use ics::{CalendarExportEvent, encode, try_encode};
