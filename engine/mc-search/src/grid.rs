//! Per-square score accumulator.
//!
//! Scores are stored in a contiguous row-major `Vec<f64>` and addressed by
//! [`Coord`]. A grid lives for exactly one search call.

use engine_core::Coord;
use serde::Serialize;

/// N×N grid of accumulated scores, one entry per board square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreGrid {
    dim: usize,
    scores: Vec<f64>,
}

impl ScoreGrid {
    /// Create an all-zero grid for a board of the given dimension.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            scores: vec![0.0; dim * dim],
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Score accumulated for the given square.
    #[inline]
    pub fn get(&self, coord: Coord) -> f64 {
        self.scores[coord.index(self.dim)]
    }

    /// Add `delta` to the score of the given square.
    #[inline]
    pub fn add(&mut self, coord: Coord, delta: f64) {
        self.scores[coord.index(self.dim)] += delta;
    }

    /// Add every entry of `other` into this grid.
    ///
    /// Used to reduce partial grids produced by parallel trial batches.
    ///
    /// # Panics
    /// Panics if the two grids have different dimensions.
    pub fn merge(&mut self, other: &ScoreGrid) {
        assert_eq!(self.dim, other.dim, "cannot merge grids of different sizes");
        for (mine, theirs) in self.scores.iter_mut().zip(&other.scores) {
            *mine += theirs;
        }
    }

    /// Sum of all entries.
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Scores as rows, for display and logging.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.scores
            .chunks(self.dim.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    /// Iterate `(coord, score)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, f64)> + '_ {
        let dim = self.dim;
        self.scores
            .iter()
            .enumerate()
            .map(move |(idx, &score)| (Coord::from_index(idx, dim), score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zero() {
        let grid = ScoreGrid::new(3);
        assert_eq!(grid.dim(), 3);
        assert_eq!(grid.iter().count(), 9);
        assert!(grid.iter().all(|(_, s)| s == 0.0));
        assert_eq!(grid.total(), 0.0);
    }

    #[test]
    fn test_add_and_get() {
        let mut grid = ScoreGrid::new(3);
        grid.add(Coord::new(1, 2), 1.5);
        grid.add(Coord::new(1, 2), -0.5);
        grid.add(Coord::new(0, 0), 2.0);

        assert!((grid.get(Coord::new(1, 2)) - 1.0).abs() < 1e-12);
        assert!((grid.get(Coord::new(0, 0)) - 2.0).abs() < 1e-12);
        assert_eq!(grid.get(Coord::new(2, 2)), 0.0);
        assert!((grid.total() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_merge() {
        let mut a = ScoreGrid::new(2);
        let mut b = ScoreGrid::new(2);
        a.add(Coord::new(0, 1), 1.0);
        b.add(Coord::new(0, 1), 2.0);
        b.add(Coord::new(1, 0), -1.0);

        a.merge(&b);
        assert_eq!(a.rows(), vec![vec![0.0, 3.0], vec![-1.0, 0.0]]);
    }

    #[test]
    #[should_panic]
    fn test_merge_mismatched_dims_panics() {
        let mut a = ScoreGrid::new(2);
        a.merge(&ScoreGrid::new(3));
    }
}
