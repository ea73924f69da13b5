//! Topos CLI: the `topos` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Spells { boot, json } => commands::spells::run(boot, json),

        Commands::Cast { names, boot, json } => commands::cast::run(names, boot, json),

        Commands::Truth {
            apply,
            tag,
            boot,
            json,
        } => commands::truth::run(apply, tag, boot, json),

        Commands::Compose {
            first,
            second,
            boot,
            json,
        } => commands::compose::run(first, second, boot, json),

        Commands::Classify {
            subset,
            whole,
            json,
        } => commands::classify::run(subset, whole, json),
    }
}
