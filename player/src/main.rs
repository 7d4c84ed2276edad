//! Player - Console host loop for the Monte Carlo tic-tac-toe engine
//!
//! Plays a series of games on an N×N board:
//! 1. X always moves first
//! 2. The machine side picks its moves with a flat Monte Carlo search
//! 3. The opponent is either a uniform random mover or a second machine
//! 4. Per-game results are logged and an optional JSON summary is written

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{error, info};

mod config;
mod game;
mod stats;

use crate::config::Config;
use crate::game::Match;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    // Parse configuration
    let config = Config::parse();

    // Validate configuration
    config.validate()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");

    // Seed 0 draws a fresh seed; log it so the match can be replayed
    let seed = if config.seed == 0 {
        rand::thread_rng().gen()
    } else {
        config.seed
    };
    info!(seed, "Seeding match RNG");
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let game_match = Match::from_config(&config)?;
    info!(
        games = config.games,
        dimension = config.dimension,
        reverse = config.reverse,
        machine = %game_match.machine(),
        opponent = %game_match.opponent(),
        trials = config.trials,
        workers = config.workers,
        "Starting match"
    );

    let stats = match game_match.play(config.games, &mut rng) {
        Ok(stats) => stats,
        Err(e) => {
            error!("Match failed: {}", e);
            return Err(e);
        }
    };

    stats.log_summary();

    if let Some(path) = &config.stats_path {
        stats.snapshot(&config).write_to(path)?;
        info!("Wrote match summary to {}", path);
    }

    Ok(())
}
