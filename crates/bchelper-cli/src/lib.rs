//! CLI interface for bchelper.
//!
//! `serve` runs the web front-end; `download` and `shuffle-all` drive the
//! same ports straight from the terminal, which is handy inside the
//! docker-compose stack (`docker exec ... bchelper shuffle-all`).

pub mod commands;
pub mod handlers;

use clap::Parser;

pub use commands::Commands;

/// BlackCandy helper: media downloads and shuffle-playlist rebuilds.
#[derive(Parser)]
#[command(name = "bchelper", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
