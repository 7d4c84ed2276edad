//! Board capability trait.
//!
//! The Monte Carlo engine never looks inside a board. Everything it needs is
//! expressed by [`Board`]: enumerate empty squares, place a piece, read a
//! square, report the terminal status and the dimension, and clone.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::{Cell, Player};

/// Position of a square on an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this square on a board of the given dimension.
    #[inline]
    pub const fn index(self, dim: usize) -> usize {
        self.row * dim + self.col
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    pub const fn from_index(index: usize, dim: usize) -> Self {
        Self {
            row: index / dim,
            col: index % dim,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The game is still being played.
    Ongoing,
    /// The given player has won.
    Win(Player),
    /// The board is full and nobody won.
    Draw,
}

impl Status {
    /// Check if the game is over
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Ongoing)
    }

    /// The winning player, if there is one.
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Capability set required from a board by the Monte Carlo search.
///
/// Implementations must uphold a few contracts the engine relies on without
/// re-checking them on every simulated move:
/// - `empty_cells` enumerates squares in a fixed order (row-major for the
///   bundled boards), and the order only changes as squares fill up.
/// - `apply_move` is only called with a coordinate returned by `empty_cells`.
/// - `clone` produces an independent deep copy.
///
/// # Example
///
/// ```rust
/// use engine_core::{Board, Cell, Coord, Player, Status};
///
/// #[derive(Clone)]
/// struct OneSquare(Cell);
///
/// impl Board for OneSquare {
///     fn dim(&self) -> usize { 1 }
///     fn empty_cells(&self) -> Vec<Coord> {
///         if self.0.is_empty() { vec![Coord::new(0, 0)] } else { Vec::new() }
///     }
///     fn square(&self, _coord: Coord) -> Cell { self.0 }
///     fn apply_move(&mut self, _coord: Coord, player: Player) { self.0 = player.to_cell(); }
///     fn status(&self) -> Status {
///         self.0.player().map_or(Status::Ongoing, Status::Win)
///     }
/// }
///
/// let mut board = OneSquare(Cell::Empty);
/// board.apply_move(Coord::new(0, 0), Player::O);
/// assert_eq!(board.status(), Status::Win(Player::O));
/// ```
pub trait Board: Clone {
    /// Side length N of the square board.
    fn dim(&self) -> usize;

    /// All currently vacant squares.
    fn empty_cells(&self) -> Vec<Coord>;

    /// Occupant of the given square.
    fn square(&self, coord: Coord) -> Cell;

    /// Place a piece for `player` on the given (empty) square.
    fn apply_move(&mut self, coord: Coord, player: Player);

    /// Current status of the game.
    fn status(&self) -> Status;

    /// Iterate every coordinate of the board in row-major order.
    fn coords(&self) -> CoordIter {
        CoordIter::new(self.dim())
    }
}

/// Row-major iterator over every square of an N×N board.
#[derive(Debug, Clone)]
pub struct CoordIter {
    dim: usize,
    next: usize,
}

impl CoordIter {
    pub fn new(dim: usize) -> Self {
        Self { dim, next: 0 }
    }
}

impl Iterator for CoordIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.dim * self.dim {
            return None;
        }
        let coord = Coord::from_index(self.next, self.dim);
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.dim * self.dim).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CoordIter {}
