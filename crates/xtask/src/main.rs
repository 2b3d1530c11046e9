//! Development tasks for the combat workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod config;
mod sound;

use anyhow::Result;
use clap::Parser;
use commands::{Drill, List};

/// Development tasks for the combat workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for combat content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List abilities and weapons in the content catalog
    List(List),

    /// Drive a loadout through a tick-by-tick combat drill
    Drill(Drill),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for COMBAT_* overrides)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Drill(cmd) => cmd.execute(),
    }
}
