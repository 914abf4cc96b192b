//! remap CLI entry point

use clap::Parser;
use remap::cli::{Cli, Commands};
use remap::core::error::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("REMAP_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Map(args) => remap::cli::map::run(args),
        Commands::Probe(args) => remap::cli::probe::run(args),
    }
}
