//! Top-level CLI parser.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the aria mirror-pool client.
#[derive(Parser)]
#[command(name = "aria")]
#[command(about = "Query a pool of music API mirrors and track downloads")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
