//! Random playout simulator.
//!
//! Plays a game to completion from a given position with both sides choosing
//! uniformly among the empty squares. The board passed in is a private trial
//! clone and is mutated in place.

use engine_core::{Board, Player};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play random moves, alternating players starting with `first`, until the
/// board reaches a terminal status.
///
/// Returns the number of moves applied. Calling this on a board that is already
/// terminal applies nothing and returns 0.
pub fn play_out<B, R>(board: &mut B, first: Player, rng: &mut R) -> usize
where
    B: Board,
    R: Rng + ?Sized,
{
    let mut player = first;
    let mut moves = 0;

    while !board.status().is_terminal() {
        let empty = board.empty_cells();
        let Some(&coord) = empty.choose(rng) else {
            // Only a board that breaks the status contract gets here
            break;
        };
        board.apply_move(coord, player);
        player = player.opponent();
        moves += 1;
    }

    moves
}
