//! Monte Carlo search configuration parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::ScoreWeights;

/// How the move selector resolves several empty squares sharing the top score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// First maximal square in the board's enumeration order.
    #[default]
    First,
    /// Uniformly random among all maximal squares.
    Random,
}

/// Error returned when a tie-break name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tie break '{0}', expected 'first' or 'random'")]
pub struct ParseTieBreakError(pub String);

impl std::str::FromStr for TieBreak {
    type Err = ParseTieBreakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(TieBreak::First),
            "random" => Ok(TieBreak::Random),
            other => Err(ParseTieBreakError(other.to_string())),
        }
    }
}

/// Configuration for a Monte Carlo move search.
#[derive(Debug, Clone, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of random playouts per search.
    pub num_trials: u32,

    /// Reward table weights applied to every decided playout.
    pub weights: ScoreWeights,

    /// Tie-break rule for the final move selection.
    pub tie_break: TieBreak,

    /// Number of independent trial batches run in parallel.
    /// 1 runs every trial on the calling thread.
    pub workers: usize,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            num_trials: 100,
            weights: ScoreWeights::default(),
            tie_break: TieBreak::First,
            workers: 1,
        }
    }
}

impl MonteCarloConfig {
    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            num_trials: 50,
            ..Self::default()
        }
    }

    /// Builder pattern: set number of trials.
    pub fn with_trials(mut self, n: u32) -> Self {
        self.num_trials = n;
        self
    }

    /// Builder pattern: set the reward table weights.
    pub fn with_weights(mut self, current: f64, other: f64) -> Self {
        self.weights = ScoreWeights::new(current, other);
        self
    }

    /// Builder pattern: set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Builder pattern: set the number of parallel workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}
