use std::path::{Path, PathBuf};

use anyhow::Context;
use gd_calendar::{CalendarExportEvent, ExportFile};
use gd_config::GoodDatesConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub mime_type: &'static str,
    pub bytes: usize,
}

/// Handle `gdt export`.
pub fn handle(
    args: &ExportArgs,
    config: &GoodDatesConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let file = build_file(args, &config.export.filename)?;

    if args.stdout {
        print!("{}", file.contents);
        return Ok(());
    }

    let directory = args
        .dir
        .clone()
        .unwrap_or_else(|| config.export.directory_path());
    let receipt = save(&file, &directory)?;
    output(&receipt, flags.format)
}

/// Encode the event from the command line, rejecting unparsable dates.
fn build_file(args: &ExportArgs, filename: &str) -> anyhow::Result<ExportFile> {
    let event = CalendarExportEvent::new(
        args.title.as_str(),
        args.description.as_str(),
        args.start.as_str(),
        args.end.as_str(),
    );
    let file = ExportFile::try_for_event(&event)
        .context("invalid export event (check --start and --end)")?;
    Ok(file.with_filename(filename))
}

fn save(file: &ExportFile, directory: &Path) -> anyhow::Result<ExportReceipt> {
    let path = file
        .save_to(directory)
        .with_context(|| format!("failed to save export into '{}'", directory.display()))?;
    Ok(ExportReceipt {
        path,
        mime_type: file.mime_type,
        bytes: file.contents.len(),
    })
}
