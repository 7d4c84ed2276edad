//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_seed() -> u64 {
    defaults::seed()
}
fn d_num_trials() -> u32 {
    defaults::num_trials()
}
fn d_score_current() -> f64 {
    defaults::score_current()
}
fn d_score_other() -> f64 {
    defaults::score_other()
}
fn d_workers() -> usize {
    defaults::workers()
}
fn d_tie_break() -> String {
    defaults::tie_break().into()
}
fn d_dimension() -> usize {
    defaults::dimension()
}
fn d_reverse() -> bool {
    defaults::reverse()
}
fn d_machine() -> String {
    defaults::machine().into()
}
fn d_opponent() -> String {
    defaults::opponent().into()
}
fn d_games() -> u32 {
    defaults::games()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub game: GameConfig,
}

/// Common configuration shared by all components
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
    /// RNG seed; 0 draws a seed from system entropy
    #[serde(default = "d_seed")]
    pub seed: u64,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
            seed: defaults::seed(),
        }
    }
}

/// Monte Carlo search configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "d_num_trials")]
    pub num_trials: u32,
    /// Reward magnitude for squares when the machine wins a playout
    #[serde(default = "d_score_current")]
    pub score_current: f64,
    /// Reward magnitude for squares when the other player wins a playout
    #[serde(default = "d_score_other")]
    pub score_other: f64,
    #[serde(default = "d_workers")]
    pub workers: usize,
    /// "first" or "random"
    #[serde(default = "d_tie_break")]
    pub tie_break: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_trials: defaults::num_trials(),
            score_current: defaults::score_current(),
            score_other: defaults::score_other(),
            workers: defaults::workers(),
            tie_break: defaults::tie_break().into(),
        }
    }
}

/// Match configuration for the console player
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    #[serde(default = "d_dimension")]
    pub dimension: usize,
    /// Play the reverse (misère) rules
    #[serde(default = "d_reverse")]
    pub reverse: bool,
    /// Side played by the Monte Carlo machine: "x" or "o"
    #[serde(default = "d_machine")]
    pub machine: String,
    /// "random" or "machine"
    #[serde(default = "d_opponent")]
    pub opponent: String,
    #[serde(default = "d_games")]
    pub games: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: defaults::dimension(),
            reverse: defaults::reverse(),
            machine: defaults::machine().into(),
            opponent: defaults::opponent().into(),
            games: defaults::games(),
        }
    }
}
