//! Development tasks for the navigation crates
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{FindPath, Probe};

/// Development tasks for the navigation crates
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Path planning and collision tools for mask images", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Plan a route between two points on a collision mask
    FindPath(FindPath),

    /// Report walkability and disc fit at one point
    Probe(Probe),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for NAV_RADIUS and other env vars)
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
        Command::FindPath(cmd) => cmd.execute(),
        Command::Probe(cmd) => cmd.execute(),
    }
}
