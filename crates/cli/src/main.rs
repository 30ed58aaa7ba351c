//! Relay CLI
//!
//! Command-line interface for the relay-kit job tracker. Each subcommand
//! maps to one lifecycle operation; the actual media processing happens in
//! the external notebook the `handoff` command links to.

mod commands;

use clap::Parser;
use commands::{handle_command, Commands};
use rk_core::config::load_config;
use rk_core::jobs::JobTracker;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "Manual media-processing job tracker", long_about = None)]
struct Cli {
    /// Tracker root directory (holds the job index and artifact store)
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = load_config(&cli.root)?;
    let tracker = JobTracker::open(&cli.root, &config);

    handle_command(cli.command, &tracker)
}
