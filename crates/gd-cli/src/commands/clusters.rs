use anyhow::Context;
use gd_calendar::clusters_for;
use gd_config::GoodDatesConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClustersArgs;
use crate::commands::shared::load_response;
use crate::output::output;

/// Handle `gdt clusters`.
pub fn handle(
    args: &ClustersArgs,
    config: &GoodDatesConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = load_response(&args.input)?;
    let max_gap = args.max_gap.unwrap_or(config.calendar.cluster_max_gap_days);

    let clusters = clusters_for(&result, max_gap)
        .with_context(|| format!("failed to cluster dates from '{}'", args.input))?;

    output(&clusters, flags.format)
}
