use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ZodiacArgs;
use crate::output::output;

/// Handle `gdt zodiac`.
pub fn handle(args: &ZodiacArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sign = gd_zodiac::resolve_str(&args.birth_date)
        .with_context(|| format!("cannot resolve a zodiac sign for '{}'", args.birth_date))?;
    output(sign, flags.format)
}
