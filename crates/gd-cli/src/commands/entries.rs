use anyhow::Context;
use gd_calendar::{EntryOptions, build_entries};
use gd_config::GoodDatesConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EntriesArgs;
use crate::commands::shared::load_response;
use crate::output::output;

/// Handle `gdt entries`.
pub fn handle(
    args: &EntriesArgs,
    config: &GoodDatesConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = load_response(&args.input)?;

    let sign = args
        .birth_date
        .as_deref()
        .map(gd_zodiac::resolve_str)
        .transpose()
        .context("invalid --birth-date")?;

    let options = EntryOptions {
        default_color: config.calendar.default_color.clone(),
        sign,
    };
    let entries = build_entries(&result, &options)
        .with_context(|| format!("failed to derive calendar entries from '{}'", args.input))?;

    output(&entries, flags.format)
}
