//! Configuration for the player binary
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_config::{load_config, CentralConfig};
use engine_core::Player;
use mc_search::{MonteCarloConfig, TieBreak};
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

use crate::game::Opponent;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

// Default value functions that read from central config
fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.common.seed
}

fn default_trials() -> u32 {
    CENTRAL_CONFIG.search.num_trials
}

fn default_score_current() -> f64 {
    CENTRAL_CONFIG.search.score_current
}

fn default_score_other() -> f64 {
    CENTRAL_CONFIG.search.score_other
}

fn default_workers() -> usize {
    CENTRAL_CONFIG.search.workers
}

fn default_tie_break() -> String {
    CENTRAL_CONFIG.search.tie_break.clone()
}

fn default_dimension() -> usize {
    CENTRAL_CONFIG.game.dimension
}

fn default_reverse() -> bool {
    CENTRAL_CONFIG.game.reverse
}

fn default_machine() -> String {
    CENTRAL_CONFIG.game.machine.clone()
}

fn default_opponent() -> String {
    CENTRAL_CONFIG.game.opponent.clone()
}

fn default_games() -> u32 {
    CENTRAL_CONFIG.game.games
}

#[derive(Parser, Debug, Clone)]
#[command(name = "player")]
#[command(about = "Monte Carlo tic-tac-toe player")]
#[command(
    long_about = "Plays tic-tac-toe matches where the machine side chooses its moves
by flat Monte Carlo sampling of random playouts.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,

    /// RNG seed (0 draws a random seed)
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Number of random playouts per machine move
    #[arg(long, default_value_t = default_trials())]
    pub trials: u32,

    /// Score magnitude for squares of a playout the machine won
    #[arg(long, default_value_t = default_score_current())]
    pub score_current: f64,

    /// Score magnitude for squares of a playout the machine lost
    #[arg(long, default_value_t = default_score_other())]
    pub score_other: f64,

    /// Parallel trial batches per search (1 = sequential)
    #[arg(long, default_value_t = default_workers())]
    pub workers: usize,

    /// Tie break among equally scored squares (first, random)
    #[arg(long, default_value_t = default_tie_break())]
    pub tie_break: String,

    /// Board dimension N (N×N board, N in a row wins)
    #[arg(long, default_value_t = default_dimension())]
    pub dimension: usize,

    /// Play reverse rules: completing a line loses
    #[arg(long, default_value_t = default_reverse())]
    pub reverse: bool,

    /// Side played by the machine (x, o)
    #[arg(long, default_value_t = default_machine())]
    pub machine: String,

    /// Opponent type (random, machine)
    #[arg(long, default_value_t = default_opponent())]
    pub opponent: String,

    /// Number of games to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Print the board after every move
    #[arg(long)]
    pub show_boards: bool,

    /// Write a JSON match summary to this path
    #[arg(long)]
    pub stats_path: Option<String>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        if self.trials == 0 {
            return Err(anyhow!("trials must be greater than 0"));
        }

        if self.workers == 0 {
            return Err(anyhow!("workers must be greater than 0"));
        }

        if self.dimension == 0 {
            return Err(anyhow!("dimension must be greater than 0"));
        }

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if !self.score_current.is_finite() || !self.score_other.is_finite() {
            return Err(anyhow!("score_current and score_other must be finite"));
        }

        self.machine_player()?;
        self.opponent_kind()?;
        self.tie_break_rule()?;

        Ok(())
    }

    /// Side played by the Monte Carlo machine.
    pub fn machine_player(&self) -> Result<Player> {
        self.machine
            .parse()
            .map_err(|e| anyhow!("invalid machine side: {}", e))
    }

    pub fn opponent_kind(&self) -> Result<Opponent> {
        self.opponent.parse()
    }

    pub fn tie_break_rule(&self) -> Result<TieBreak> {
        Ok(self.tie_break.parse()?)
    }

    /// Search parameters shared by every machine move of the match.
    pub fn search_config(&self) -> Result<MonteCarloConfig> {
        Ok(MonteCarloConfig::default()
            .with_trials(self.trials)
            .with_weights(self.score_current, self.score_other)
            .with_workers(self.workers)
            .with_tie_break(self.tie_break_rule()?))
    }
}
