//! Command-line interface for noughts.

use clap::Parser;

/// Noughts - tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer, keeping score across rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the computer's moves (replays a session exactly)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Stop after this many rounds instead of asking to play again
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,
}
