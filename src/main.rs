//! Noughts - console entry point.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Console, SessionConfig};
use noughts_engine::RoundEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    }
    .with_overrides(cli.seed, cli.rounds);

    let mut engine = match config.seed() {
        Some(seed) => RoundEngine::seeded(*seed),
        None => RoundEngine::from_entropy(),
    };
    info!(seed = engine.rng().seed(), "Starting session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let scores = console.run(&mut engine, *config.max_rounds())?;

    info!(%scores, "Session over");
    Ok(())
}
