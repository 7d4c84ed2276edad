//! Flat Monte Carlo move selection for two-player board games.
//!
//! This crate provides a game-agnostic Monte Carlo player that works with any
//! board implementing the `engine-core` [`Board`](engine_core::Board) trait.
//!
//! # Overview
//!
//! Each search runs a fixed number of independent trials. A trial consists of
//! two phases:
//!
//! 1. **Playout**: Clone the real board and play it to the end with uniformly
//!    random moves, the machine player moving first
//! 2. **Scoring**: Credit or debit every occupied square of the finished
//!    board, depending on who won and who holds the square
//!
//! Once all trials are folded into the score grid, the empty square of the
//! real board with the highest score is returned.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Board, Player};
//! use games_tictactoe::TicTacToe;
//! use mc_search::{choose_move, run_search, MonteCarloConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let board = TicTacToe::from_rows(&["XX.", "OO.", "..."]).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! // One-call form
//! let mv = choose_move(&board, Player::X, 100, &mut rng).unwrap();
//! assert!(board.empty_cells().contains(&mv));
//!
//! // Full result with scores and trial stats
//! let config = MonteCarloConfig::default().with_trials(200).with_workers(2);
//! let result = run_search(&board, Player::X, config, &mut rng).unwrap();
//! assert_eq!(result.stats.trials, 200);
//! ```
//!
//! # Configuration
//!
//! The [`MonteCarloConfig`] struct controls search behavior:
//!
//! - `num_trials`: Number of playouts per search (default: 100)
//! - `weights`: Reward table weights for machine wins and losses (default: 1.0 / 1.0)
//! - `tie_break`: `First` (scan order) or `Random` among the top squares
//! - `workers`: Number of parallel trial batches (default: 1, sequential)

pub mod config;
pub mod grid;
pub mod parallel;
pub mod playout;
pub mod scoring;
pub mod search;
pub mod select;

// Re-export main types
pub use config::{MonteCarloConfig, ParseTieBreakError, TieBreak};
pub use grid::ScoreGrid;
pub use playout::play_out;
pub use scoring::{update_scores, ScoreWeights};
pub use search::{choose_move, run_search, MonteCarloSearch, SearchError, SearchResult, SearchStats};
pub use select::{best_move, maximal_moves, select_move};
