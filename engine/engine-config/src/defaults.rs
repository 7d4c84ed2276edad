//! Default configuration values loaded from config.defaults.toml.
//!
//! This module embeds the shared defaults file at compile time so every
//! component starts from identical values.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
    game: GameDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
    seed: u64,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    num_trials: u32,
    score_current: f64,
    score_other: f64,
    workers: usize,
    tie_break: String,
}

#[derive(Debug, Deserialize)]
struct GameDefaults {
    dimension: usize,
    reverse: bool,
    machine: String,
    opponent: String,
    games: u32,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}
pub fn seed() -> u64 {
    DEFAULTS.common.seed
}

// Search
pub fn num_trials() -> u32 {
    DEFAULTS.search.num_trials
}
pub fn score_current() -> f64 {
    DEFAULTS.search.score_current
}
pub fn score_other() -> f64 {
    DEFAULTS.search.score_other
}
pub fn workers() -> usize {
    DEFAULTS.search.workers
}
pub fn tie_break() -> &'static str {
    &DEFAULTS.search.tie_break
}

// Game
pub fn dimension() -> usize {
    DEFAULTS.game.dimension
}
pub fn reverse() -> bool {
    DEFAULTS.game.reverse
}
pub fn machine() -> &'static str {
    &DEFAULTS.game.machine
}
pub fn opponent() -> &'static str {
    &DEFAULTS.game.opponent
}
pub fn games() -> u32 {
    DEFAULTS.game.games
}
