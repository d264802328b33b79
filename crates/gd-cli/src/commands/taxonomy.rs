use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gdt taxonomy`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&gd_core::taxonomy::snapshot(), flags.format)
}
