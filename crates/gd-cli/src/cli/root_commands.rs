use std::path::PathBuf;

use clap::{Args, Subcommand};
use gd_calendar::{MonthStyle, NumericStyle, TextStyle};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Resolve the zodiac sign for a birth date.
    Zodiac(ZodiacArgs),
    /// Render a short display label for a date.
    Format(FormatArgs),
    /// Print the element, category, and time-of-day tables.
    Taxonomy,
    /// Derive calendar entries from a good-dates JSON response.
    Entries(EntriesArgs),
    /// Group a response's good dates into power periods.
    Clusters(ClustersArgs),
    /// Encode one event as an iCalendar file.
    Export(ExportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ZodiacArgs {
    /// Birth date (YYYY-MM-DD, RFC 3339, or naive date-time).
    pub birth_date: String,
}

#[derive(Clone, Debug, Args)]
pub struct FormatArgs {
    /// Date or date-time to format.
    pub date: String,
    /// numeric, 2-digit, short, long, narrow
    #[arg(long)]
    pub month: Option<MonthStyle>,
    /// numeric, 2-digit
    #[arg(long)]
    pub day: Option<NumericStyle>,
    /// numeric, 2-digit
    #[arg(long)]
    pub year: Option<NumericStyle>,
    /// short, long, narrow
    #[arg(long)]
    pub weekday: Option<TextStyle>,
    /// numeric, 2-digit
    #[arg(long)]
    pub hour: Option<NumericStyle>,
    /// numeric, 2-digit
    #[arg(long)]
    pub minute: Option<NumericStyle>,
}

impl FormatArgs {
    #[must_use]
    pub const fn has_styles(&self) -> bool {
        self.month.is_some()
            || self.day.is_some()
            || self.year.is_some()
            || self.weekday.is_some()
            || self.hour.is_some()
            || self.minute.is_some()
    }
}

#[derive(Clone, Debug, Args)]
pub struct EntriesArgs {
    /// Response file, or `-` for stdin.
    pub input: String,
    /// Birth date used for the element color when the response has no zodiac block.
    #[arg(long)]
    pub birth_date: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ClustersArgs {
    /// Response file, or `-` for stdin.
    pub input: String,
    /// Largest day gap inside one cluster (defaults to config).
    #[arg(long)]
    pub max_gap: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Start date or date-time.
    #[arg(long)]
    pub start: String,
    /// End date or date-time.
    #[arg(long)]
    pub end: String,
    /// Output directory (defaults to config `export.directory`).
    #[arg(long)]
    pub dir: Option<PathBuf>,
    /// Print the document instead of saving it.
    #[arg(long)]
    pub stdout: bool,
}
