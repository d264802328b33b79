use gd_config::GoodDatesConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command that needs configuration.
pub fn dispatch(
    command: Commands,
    config: &GoodDatesConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Entries(args) => commands::entries::handle(&args, config, flags),
        Commands::Clusters(args) => commands::clusters::handle(&args, config, flags),
        Commands::Export(args) => commands::export::handle(&args, config, flags),
        Commands::Zodiac(_) | Commands::Format(_) | Commands::Taxonomy => {
            unreachable!("zodiac/format/taxonomy are pre-dispatched in main")
        }
    }
}
