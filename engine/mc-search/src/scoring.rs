//! Outcome scorer.
//!
//! Turns one finished playout into per-square score deltas. Only squares that
//! are occupied on the final board carry signal; a draw carries none.
//!
//! | machine won | square held by machine | delta            |
//! |-------------|------------------------|------------------|
//! | yes         | yes                    | `+current`       |
//! | yes         | no                     | `-current`       |
//! | no          | no                     | `+other`         |
//! | no          | yes                    | `-other`         |
//!
//! The table keys on whether the occupant is the machine player, not on
//! whether the occupant is the winner.

use engine_core::{Board, Player, Status};
use serde::{Deserialize, Serialize};

use crate::grid::ScoreGrid;

/// Weights of the reward table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Magnitude applied when the machine player won the playout.
    pub current: f64,
    /// Magnitude applied when the other player won the playout.
    pub other: f64,
}

impl ScoreWeights {
    pub fn new(current: f64, other: f64) -> Self {
        Self { current, other }
    }

    pub fn is_finite(&self) -> bool {
        self.current.is_finite() && self.other.is_finite()
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            current: 1.0,
            other: 1.0,
        }
    }
}

/// Score a completed board into `scores` from the machine player's standpoint.
///
/// Draws leave the grid untouched. A board that is still ongoing is treated
/// the same way, since it has no winner to attribute squares to.
pub fn update_scores<B: Board>(
    scores: &mut ScoreGrid,
    board: &B,
    machine: Player,
    weights: ScoreWeights,
) {
    let winner = match board.status() {
        Status::Win(winner) => winner,
        Status::Draw | Status::Ongoing => return,
    };
    let machine_won = winner == machine;

    for coord in board.coords() {
        let Some(occupant) = board.square(coord).player() else {
            continue;
        };
        let machine_here = occupant == machine;

        let delta = match (machine_won, machine_here) {
            (true, true) => weights.current,
            (true, false) => -weights.current,
            (false, false) => weights.other,
            (false, true) => -weights.other,
        };
        scores.add(coord, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{Cell, Coord};
    use games_tictactoe::TicTacToe;

    fn count(board: &TicTacToe, player: Player) -> f64 {
        board
            .coords()
            .filter(|&c| board.square(c) == player.to_cell())
            .count() as f64
    }

    #[test]
    fn test_machine_win_table() {
        // X wins on the top row
        let board = TicTacToe::from_rows(&["XXX", "OO.", "..."]).unwrap();
        let mut scores = ScoreGrid::new(3);
        update_scores(&mut scores, &board, Player::X, ScoreWeights::new(2.0, 3.0));

        assert_eq!(scores.get(Coord::new(0, 0)), 2.0);
        assert_eq!(scores.get(Coord::new(0, 2)), 2.0);
        assert_eq!(scores.get(Coord::new(1, 0)), -2.0);
        assert_eq!(scores.get(Coord::new(1, 1)), -2.0);
        // Empty squares carry no signal
        assert_eq!(scores.get(Coord::new(1, 2)), 0.0);
        assert_eq!(scores.get(Coord::new(2, 2)), 0.0);
    }

    #[test]
    fn test_machine_loss_table() {
        // X wins, but the machine is O
        let board = TicTacToe::from_rows(&["XXX", "OO.", "..."]).unwrap();
        let mut scores = ScoreGrid::new(3);
        update_scores(&mut scores, &board, Player::O, ScoreWeights::new(2.0, 3.0));

        // Cells held by the non-machine player are rewarded with `other`
        assert_eq!(scores.get(Coord::new(0, 1)), 3.0);
        assert_eq!(scores.get(Coord::new(1, 0)), -3.0);
        assert_eq!(scores.get(Coord::new(2, 0)), 0.0);
    }

    #[test]
    fn test_draw_leaves_grid_unchanged() {
        let board = TicTacToe::from_rows(&["XOX", "OXX", "OXO"]).unwrap();
        assert_eq!(board.status(), Status::Draw);

        let mut scores = ScoreGrid::new(3);
        scores.add(Coord::new(1, 1), 0.25);
        let before = scores.clone();

        update_scores(&mut scores, &board, Player::X, ScoreWeights::default());
        assert_eq!(scores, before);
    }

    #[test]
    fn test_ongoing_board_leaves_grid_unchanged() {
        let board = TicTacToe::from_rows(&["X..", ".O.", "..."]).unwrap();
        let mut scores = ScoreGrid::new(3);
        update_scores(&mut scores, &board, Player::X, ScoreWeights::default());
        assert_eq!(scores.total(), 0.0);
    }

    #[test]
    fn test_score_additivity() {
        let weights = ScoreWeights::new(1.5, 0.75);
        let boards = [
            TicTacToe::from_rows(&["XXX", "OO.", "..."]).unwrap(),
            TicTacToe::from_rows(&["OX.", "OX.", "O.X"]).unwrap(),
            TicTacToe::from_rows(&["XOX", "OXO", "X.O"]).unwrap(),
            TicTacToe::from_rows(&["OOOX", "XX..", "X...", "...."]).unwrap(),
        ];

        for board in &boards {
            for machine in [Player::X, Player::O] {
                let mut scores = ScoreGrid::new(board.dim());
                update_scores(&mut scores, board, machine, weights);

                let mine = count(board, machine);
                let theirs = count(board, machine.opponent());
                let expected = match board.status() {
                    Status::Win(w) if w == machine => (mine - theirs) * weights.current,
                    Status::Win(_) => (theirs - mine) * weights.other,
                    _ => 0.0,
                };
                assert!(
                    (scores.total() - expected).abs() < 1e-9,
                    "total {} != expected {} for machine {}",
                    scores.total(),
                    expected,
                    machine
                );
            }
        }
    }

    #[test]
    fn test_scores_accumulate() {
        let board = TicTacToe::from_rows(&["XXX", "OO.", "..."]).unwrap();
        let mut scores = ScoreGrid::new(3);
        for _ in 0..4 {
            update_scores(&mut scores, &board, Player::X, ScoreWeights::default());
        }
        assert_eq!(scores.get(Coord::new(0, 0)), 4.0);
        assert_eq!(scores.get(Coord::new(1, 1)), -4.0);
        assert_eq!(board.square(Coord::new(2, 2)), Cell::Empty);
        assert_eq!(scores.get(Coord::new(2, 2)), 0.0);
    }
}
