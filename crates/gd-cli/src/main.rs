use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("gdt error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    // Lookups that never touch configuration.
    match &cli.command {
        cli::Commands::Zodiac(args) => return commands::zodiac::handle(args, &flags),
        cli::Commands::Format(args) => return commands::format::handle(args, &flags),
        cli::Commands::Taxonomy => return commands::taxonomy::handle(&flags),
        _ => {}
    }

    let config = gd_config::GoodDatesConfig::load_with_dotenv()
        .context("failed to load good dates configuration")?;
    tracing::debug!(?config, "configuration loaded");

    commands::dispatch::dispatch(cli.command, &config, &flags)
}

/// Default filter level when `GOODDATES_LOG` is unset.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = log_level(flags);

    let filter = tracing_subscriber::EnvFilter::try_from_env("GOODDATES_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
