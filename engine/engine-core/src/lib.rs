//! Core traits and types for Monte Carlo board game players
//!
//! This crate provides the abstractions the search engine is written against:
//! - `Board`: Capability trait every playable board implements
//! - `Player` / `Cell`: Who moves and who occupies a square
//! - `Coord`: Row/column position on a square board
//! - `Status`: Terminal status of a position (ongoing, win, draw)

pub mod board;
pub mod player;

// Re-export main types for convenience
pub use board::{Board, Coord, CoordIter, Status};
pub use player::{Cell, ParsePlayerError, Player};
