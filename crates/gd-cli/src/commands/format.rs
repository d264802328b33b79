use serde::Serialize;

use gd_calendar::{FormatOptions, format_date_str};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FormatArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct FormattedDate {
    pub input: String,
    pub label: String,
}

/// Handle `gdt format`.
pub fn handle(args: &FormatArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let label = format_date_str(&args.date, &options_for(args))?;
    output(
        &FormattedDate {
            input: args.date.clone(),
            label,
        },
        flags.format,
    )
}

/// Explicit styles replace the default month + day label entirely.
fn options_for(args: &FormatArgs) -> FormatOptions {
    if !args.has_styles() {
        return FormatOptions::default();
    }
    FormatOptions {
        month: args.month,
        day: args.day,
        year: args.year,
        weekday: args.weekday,
        hour: args.hour,
        minute: args.minute,
    }
}
