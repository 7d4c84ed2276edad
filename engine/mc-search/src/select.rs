//! Move selector.
//!
//! Picks the empty square with the highest accumulated score. The scan runs
//! over the empty squares in the order given and only replaces the current
//! best on a strictly greater score, so ties go to the first maximal square.

use engine_core::Coord;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::TieBreak;
use crate::grid::ScoreGrid;

/// Highest-scoring square among `empty`, first in scan order on ties.
///
/// Returns `None` when there are no empty squares.
pub fn best_move(scores: &ScoreGrid, empty: &[Coord]) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;

    for &coord in empty {
        let score = scores.get(coord);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((coord, score)),
        }
    }

    best.map(|(coord, _)| coord)
}

/// All empty squares sharing the top score, in scan order.
pub fn maximal_moves(scores: &ScoreGrid, empty: &[Coord]) -> Vec<Coord> {
    let Some(top) = empty
        .iter()
        .map(|&coord| scores.get(coord))
        .max_by(|a, b| a.total_cmp(b))
    else {
        return Vec::new();
    };

    empty
        .iter()
        .copied()
        .filter(|&coord| scores.get(coord) == top)
        .collect()
}

/// Select a move using the configured tie-break rule.
pub fn select_move<R: Rng + ?Sized>(
    scores: &ScoreGrid,
    empty: &[Coord],
    tie_break: TieBreak,
    rng: &mut R,
) -> Option<Coord> {
    match tie_break {
        TieBreak::First => best_move(scores, empty),
        TieBreak::Random => maximal_moves(scores, empty).choose(rng).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn grid(rows: &[&[f64]]) -> ScoreGrid {
        let mut grid = ScoreGrid::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, &score) in row.iter().enumerate() {
                grid.add(Coord::new(r, c), score);
            }
        }
        grid
    }

    fn all(dim: usize) -> Vec<Coord> {
        (0..dim * dim).map(|i| Coord::from_index(i, dim)).collect()
    }

    #[test]
    fn test_best_move_picks_maximum() {
        let scores = grid(&[&[0.0, 1.0, -2.0], &[3.0, 0.5, 0.0], &[-1.0, 2.9, 0.0]]);
        assert_eq!(best_move(&scores, &all(3)), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_best_move_only_considers_empty_squares() {
        let scores = grid(&[&[9.0, 1.0], &[2.0, 0.0]]);
        let empty = vec![Coord::new(0, 1), Coord::new(1, 1)];
        assert_eq!(best_move(&scores, &empty), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_best_move_handles_all_negative_scores() {
        let scores = grid(&[&[-5.0, -1.0], &[-3.0, -2.0]]);
        assert_eq!(best_move(&scores, &all(2)), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_tie_break_is_first_in_scan_order() {
        let scores = grid(&[&[0.0, 2.0, 0.0], &[0.0, 0.0, 2.0], &[2.0, 0.0, 0.0]]);
        let empty = all(3);

        for _ in 0..10 {
            assert_eq!(best_move(&scores, &empty), Some(Coord::new(0, 1)));
        }

        // Scan order is the caller's order
        let reversed: Vec<Coord> = empty.iter().rev().copied().collect();
        assert_eq!(best_move(&scores, &reversed), Some(Coord::new(2, 0)));
    }

    #[test]
    fn test_best_move_no_empty_squares() {
        let scores = ScoreGrid::new(3);
        assert_eq!(best_move(&scores, &[]), None);
        assert!(maximal_moves(&scores, &[]).is_empty());
    }

    #[test]
    fn test_maximal_moves() {
        let scores = grid(&[&[1.0, 2.0], &[2.0, -1.0]]);
        assert_eq!(
            maximal_moves(&scores, &all(2)),
            vec![Coord::new(0, 1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_random_tie_break_samples_among_ties() {
        let scores = grid(&[&[1.0, 2.0], &[2.0, -1.0]]);
        let empty = all(2);
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        let mut seen = [0u32; 4];
        for _ in 0..200 {
            let mv = select_move(&scores, &empty, TieBreak::Random, &mut rng).unwrap();
            seen[mv.index(2)] += 1;
        }

        assert_eq!(seen[0], 0);
        assert_eq!(seen[3], 0);
        assert!(seen[1] > 0 && seen[2] > 0);
    }

    #[test]
    fn test_first_tie_break_ignores_rng() {
        let scores = grid(&[&[1.0, 1.0], &[1.0, 1.0]]);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(
                select_move(&scores, &all(2), TieBreak::First, &mut rng),
                Some(Coord::new(0, 0))
            );
        }
    }
}
