//! Parallel trial execution.
//!
//! Trials are split into one batch per worker. Every batch gets its own
//! `ChaCha20Rng`, seeded from the caller's generator before any batch starts,
//! and folds into a private grid. Partial grids are summed only after every
//! batch has finished, then the move is selected once on the real board.
//! For a fixed seed and worker count the result does not depend on thread
//! scheduling.

use engine_core::Board;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::grid::ScoreGrid;
use crate::search::{run_trials, MonteCarloSearch, SearchError, SearchResult, SearchStats};

/// Split `trials` into `workers` batch sizes that differ by at most one.
pub fn batch_sizes(trials: u32, workers: usize) -> Vec<u32> {
    let workers = workers.clamp(1, trials.max(1) as usize) as u32;
    let base = trials / workers;
    let extra = trials % workers;
    (0..workers)
        .map(|i| base + u32::from(i < extra))
        .collect()
}

/// Run the search with its trials spread over rayon's thread pool.
pub fn run_parallel<B, R>(
    search: &MonteCarloSearch<'_, B>,
    rng: &mut R,
) -> Result<SearchResult, SearchError>
where
    B: Board + Send + Sync,
    R: Rng + ?Sized,
{
    let config = search.config();
    let board = search.board();
    let machine = search.machine();

    let batches: Vec<(u32, u64)> = batch_sizes(config.num_trials, config.workers)
        .into_iter()
        .map(|size| (size, rng.gen::<u64>()))
        .collect();

    debug!(
        batches = batches.len(),
        trials = config.num_trials,
        "Running Monte Carlo trials in parallel"
    );

    let (scores, stats) = batches
        .into_par_iter()
        .map(|(size, seed)| {
            let mut batch_rng = ChaCha20Rng::seed_from_u64(seed);
            run_trials(board, machine, config, size, &mut batch_rng)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .fold(
            (ScoreGrid::new(board.dim()), SearchStats::default()),
            |(mut scores, mut stats), (batch_scores, batch_stats)| {
                scores.merge(&batch_scores);
                stats.merge(&batch_stats);
                (scores, stats)
            },
        );

    search.finish(scores, stats, rng)
}
