//! TicTacToe board implementation for the Monte Carlo engine
//!
//! This crate provides an N×N TicTacToe board implementing the
//! [`engine_core::Board`] trait. A line is a full row, a full column or one of
//! the two main diagonals. In reverse (misère) mode the player who completes a
//! line loses.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Board, Coord, Player, Status};
//! use games_tictactoe::TicTacToe;
//!
//! let mut board = TicTacToe::new(3);
//! board.apply_move(Coord::new(1, 1), Player::X);
//! assert_eq!(board.empty_cells().len(), 8);
//! assert_eq!(board.status(), Status::Ongoing);
//! ```

use engine_core::{Board, Cell, Coord, Player, Status};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a board from text rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("Board must have at least one row")]
    Empty,

    #[error("Row {row} has {len} squares, expected {dim}")]
    RaggedRow { row: usize, len: usize, dim: usize },

    #[error("Invalid square '{ch}' at ({row}, {col})")]
    InvalidSquare { ch: char, row: usize, col: usize },
}

/// TicTacToe board
///
/// Squares are stored row-major. The status is cached and refreshed after
/// every move by checking only the lines through the square just played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    dim: usize,
    cells: Vec<Cell>,
    reverse: bool,
    status: Status,
}

impl TicTacToe {
    /// Create an empty board of the given dimension.
    pub fn new(dim: usize) -> Self {
        Self::with_reverse(dim, false)
    }

    /// Create an empty board, optionally playing the reverse (misère) rules.
    pub fn with_reverse(dim: usize, reverse: bool) -> Self {
        Self {
            dim,
            cells: vec![Cell::Empty; dim * dim],
            reverse,
            status: Status::Ongoing,
        }
    }

    /// Parse a board from text rows using `X`, `O` and `.` (or space).
    ///
    /// ```rust
    /// use engine_core::{Board, Player, Status};
    /// use games_tictactoe::TicTacToe;
    ///
    /// let board = TicTacToe::from_rows(&["XXX", "OO.", "..."]).unwrap();
    /// assert_eq!(board.status(), Status::Win(Player::X));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, ParseBoardError> {
        Self::from_rows_with_reverse(rows, false)
    }

    /// Like [`TicTacToe::from_rows`] but with an explicit rule set.
    pub fn from_rows_with_reverse(rows: &[&str], reverse: bool) -> Result<Self, ParseBoardError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(ParseBoardError::Empty);
        }

        let mut cells = Vec::with_capacity(dim * dim);
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != dim {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    len: chars.len(),
                    dim,
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell =
                    Cell::from_char(ch).ok_or(ParseBoardError::InvalidSquare { ch, row, col })?;
                cells.push(cell);
            }
        }

        let mut board = Self {
            dim,
            cells,
            reverse,
            status: Status::Ongoing,
        };
        board.status = board.evaluate();
        Ok(board)
    }

    /// Whether the reverse (misère) rules are in effect.
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// Number of occupied squares.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Squares as text rows, the inverse of [`TicTacToe::from_rows`].
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.dim.max(1))
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    #[inline]
    fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dim + col]
    }

    /// True if every square of some line through `coord` holds `cell`.
    fn completes_line(&self, coord: Coord, cell: Cell) -> bool {
        let n = self.dim;
        let row = (0..n).all(|c| self.cell(coord.row, c) == cell);
        let col = (0..n).all(|r| self.cell(r, coord.col) == cell);
        let diag = coord.row == coord.col && (0..n).all(|i| self.cell(i, i) == cell);
        let anti =
            coord.row + coord.col + 1 == n && (0..n).all(|i| self.cell(i, n - 1 - i) == cell);
        row || col || diag || anti
    }

    /// Full status scan, used when a board is built from arbitrary squares.
    fn evaluate(&self) -> Status {
        let n = self.dim;
        let mut lines: Vec<Vec<Cell>> = Vec::with_capacity(2 * n + 2);
        for i in 0..n {
            lines.push((0..n).map(|c| self.cell(i, c)).collect());
            lines.push((0..n).map(|r| self.cell(r, i)).collect());
        }
        lines.push((0..n).map(|i| self.cell(i, i)).collect());
        lines.push((0..n).map(|i| self.cell(i, n - 1 - i)).collect());

        for line in &lines {
            if let Some(player) = line.first().and_then(|cell| cell.player()) {
                if line.iter().all(|&cell| cell == player.to_cell()) {
                    return self.line_outcome(player);
                }
            }
        }

        if self.cells.iter().all(|cell| !cell.is_empty()) {
            return Status::Draw;
        }

        Status::Ongoing
    }

    fn line_outcome(&self, completed_by: Player) -> Status {
        if self.reverse {
            Status::Win(completed_by.opponent())
        } else {
            Status::Win(completed_by)
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Board for TicTacToe {
    fn dim(&self) -> usize {
        self.dim
    }

    fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Coord::from_index(idx, self.dim))
            .collect()
    }

    fn square(&self, coord: Coord) -> Cell {
        self.cell(coord.row, coord.col)
    }

    fn apply_move(&mut self, coord: Coord, player: Player) {
        if coord.row >= self.dim || coord.col >= self.dim {
            return; // Invalid move, board unchanged
        }
        let idx = coord.index(self.dim);
        if !self.cells[idx].is_empty() {
            return;
        }

        self.cells[idx] = player.to_cell();

        // First line completed decides the game
        if self.status.is_terminal() {
            return;
        }
        if self.completes_line(coord, player.to_cell()) {
            self.status = self.line_outcome(player);
        } else if self.cells.iter().all(|cell| !cell.is_empty()) {
            self.status = Status::Draw;
        }
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let squares: Vec<String> = row.chars().map(|ch| ch.to_string()).collect();
            write!(f, "{}", squares.join(" "))?;
        }
        Ok(())
    }
}
