//! Monte Carlo search implementation.
//!
//! Runs the flat Monte Carlo loop:
//! 1. Clone: Copy the real board so the trial cannot affect it
//! 2. Playout: Play the clone to the end with uniformly random moves
//! 3. Score: Fold the finished board into the shared score grid
//! 4. Select: After all trials, pick the best empty square of the real board

use engine_core::{Board, Coord, Player, Status};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MonteCarloConfig;
use crate::grid::ScoreGrid;
use crate::parallel;
use crate::playout::play_out;
use crate::scoring::update_scores;
use crate::select::select_move;

/// Errors that can occur during a Monte Carlo search.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Trial count must be at least 1, got {0}")]
    InvalidTrialCount(u32),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Outcome counters collected over the trials of one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of playouts run
    pub trials: u32,
    /// Playouts won by the machine player
    pub machine_wins: u32,
    /// Playouts won by the other player
    pub other_wins: u32,
    /// Playouts that ended in a draw
    pub draws: u32,
    /// Moves applied across all playouts
    pub total_playout_moves: u64,
}

impl SearchStats {
    /// Record one finished playout.
    ///
    /// Playouts always end on a terminal board; an `Ongoing` status counts
    /// as a trial but as none of the outcomes.
    pub fn record(&mut self, status: Status, machine: Player, moves: usize) {
        debug_assert!(status.is_terminal(), "playout ended on an ongoing board");
        self.trials += 1;
        self.total_playout_moves += moves as u64;
        match status {
            Status::Win(winner) if winner == machine => self.machine_wins += 1,
            Status::Win(_) => self.other_wins += 1,
            Status::Draw => self.draws += 1,
            Status::Ongoing => {}
        }
    }

    /// Fold another batch's counters into these.
    pub fn merge(&mut self, other: &SearchStats) {
        self.trials += other.trials;
        self.machine_wins += other.machine_wins;
        self.other_wins += other.other_wins;
        self.draws += other.draws;
        self.total_playout_moves += other.total_playout_moves;
    }

    /// Average playout length in moves.
    pub fn avg_playout_moves(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_playout_moves as f64 / self.trials as f64
        }
    }
}

/// Result of a Monte Carlo search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Move to play
    pub mv: Coord,

    /// Accumulated score of every square
    pub scores: ScoreGrid,

    /// Trial outcome counters
    pub stats: SearchStats,
}

/// Monte Carlo search state for one move decision.
///
/// Holds a read-only borrow of the real board; only clones are ever mutated.
pub struct MonteCarloSearch<'a, B: Board> {
    board: &'a B,
    machine: Player,
    config: MonteCarloConfig,
}

impl<'a, B: Board> MonteCarloSearch<'a, B> {
    /// Create a new search for `machine` on the given board.
    ///
    /// Fails fast on an invalid configuration or a board without empty squares.
    pub fn new(
        board: &'a B,
        machine: Player,
        config: MonteCarloConfig,
    ) -> Result<Self, SearchError> {
        validate(&config)?;

        if board.empty_cells().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        Ok(Self {
            board,
            machine,
            config,
        })
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Run every configured trial on the calling thread and pick a move.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SearchResult, SearchError> {
        let (scores, stats) =
            run_trials(self.board, self.machine, &self.config, self.config.num_trials, rng);
        self.finish(scores, stats, rng)
    }

    /// Select the move once all trials have been folded into `scores`.
    pub(crate) fn finish<R: Rng + ?Sized>(
        &self,
        scores: ScoreGrid,
        stats: SearchStats,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        // Candidates come from the real board, never from a trial clone
        let empty = self.board.empty_cells();
        let mv = select_move(&scores, &empty, self.config.tie_break, rng)
            .ok_or(SearchError::NoLegalMoves)?;

        debug!(
            machine = %self.machine,
            trials = stats.trials,
            machine_wins = stats.machine_wins,
            other_wins = stats.other_wins,
            draws = stats.draws,
            mv = %mv,
            score = scores.get(mv),
            "Monte Carlo search complete"
        );

        Ok(SearchResult { mv, scores, stats })
    }

    pub(crate) fn board(&self) -> &B {
        self.board
    }

    pub(crate) fn machine(&self) -> Player {
        self.machine
    }
}

/// Run `trials` playouts from `board` and fold them into a fresh grid.
pub(crate) fn run_trials<B, R>(
    board: &B,
    machine: Player,
    config: &MonteCarloConfig,
    trials: u32,
    rng: &mut R,
) -> (ScoreGrid, SearchStats)
where
    B: Board,
    R: Rng + ?Sized,
{
    let mut scores = ScoreGrid::new(board.dim());
    let mut stats = SearchStats::default();

    for trial in 0..trials {
        let mut trial_board = board.clone();
        let moves = play_out(&mut trial_board, machine, rng);
        let status = trial_board.status();
        update_scores(&mut scores, &trial_board, machine, config.weights);
        stats.record(status, machine, moves);

        trace!(trial, moves, status = ?status, "Monte Carlo trial complete");
    }

    (scores, stats)
}

fn validate(config: &MonteCarloConfig) -> Result<(), SearchError> {
    if config.num_trials == 0 {
        return Err(SearchError::InvalidTrialCount(config.num_trials));
    }
    if !config.weights.is_finite() {
        return Err(SearchError::InvalidConfig(format!(
            "score weights must be finite, got {:?}",
            config.weights
        )));
    }
    if config.workers == 0 {
        return Err(SearchError::InvalidConfig(
            "workers must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Convenience function to run a single search with the given config.
///
/// Dispatches to the parallel path when `config.workers > 1`.
pub fn run_search<B, R>(
    board: &B,
    machine: Player,
    config: MonteCarloConfig,
    rng: &mut R,
) -> Result<SearchResult, SearchError>
where
    B: Board + Send + Sync,
    R: Rng + ?Sized,
{
    let search = MonteCarloSearch::new(board, machine, config)?;
    if search.config().workers > 1 {
        parallel::run_parallel(&search, rng)
    } else {
        search.run(rng)
    }
}

/// Choose a move for `machine` using `trials` random playouts.
///
/// Uses the default reward weights and the first-in-scan-order tie break.
pub fn choose_move<B, R>(
    board: &B,
    machine: Player,
    trials: u32,
    rng: &mut R,
) -> Result<Coord, SearchError>
where
    B: Board,
    R: Rng + ?Sized,
{
    let config = MonteCarloConfig::default().with_trials(trials);
    let search = MonteCarloSearch::new(board, machine, config)?;
    search.run(rng).map(|result| result.mv)
}
