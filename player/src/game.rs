//! Match runner: machine player against a random or machine opponent

use anyhow::{anyhow, Error, Result};
use engine_core::{Board, Player, Status};
use games_tictactoe::TicTacToe;
use mc_search::{run_search, MonteCarloConfig};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::Config;
use crate::stats::MatchStats;

/// Who plays against the configured machine side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Uniformly random legal moves
    Random,
    /// A second Monte Carlo player with the same search settings
    Machine,
}

impl FromStr for Opponent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Opponent::Random),
            "machine" => Ok(Opponent::Machine),
            other => Err(anyhow!(
                "unknown opponent '{}', expected 'random' or 'machine'",
                other
            )),
        }
    }
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opponent::Random => write!(f, "random"),
            Opponent::Machine => write!(f, "machine"),
        }
    }
}

/// Summary of one finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub status: Status,
    /// Moves applied by both sides
    pub moves: u32,
    /// Monte Carlo searches run during the game
    pub searches: u32,
}

/// A series of games sharing board rules and search settings.
#[derive(Debug, Clone)]
pub struct Match {
    dimension: usize,
    reverse: bool,
    machine: Player,
    opponent: Opponent,
    search: MonteCarloConfig,
    show_boards: bool,
}

impl Match {
    pub fn new(
        dimension: usize,
        reverse: bool,
        machine: Player,
        opponent: Opponent,
        search: MonteCarloConfig,
    ) -> Self {
        Self {
            dimension,
            reverse,
            machine,
            opponent,
            search,
            show_boards: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            config.dimension,
            config.reverse,
            config.machine_player()?,
            config.opponent_kind()?,
            config.search_config()?,
        )
        .with_show_boards(config.show_boards))
    }

    /// Print the board to stdout after every move.
    pub fn with_show_boards(mut self, show: bool) -> Self {
        self.show_boards = show;
        self
    }

    pub fn machine(&self) -> Player {
        self.machine
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    fn searches_for(&self, player: Player) -> bool {
        player == self.machine || self.opponent == Opponent::Machine
    }

    /// Play one game from an empty board, X moving first.
    pub fn play_game<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameRecord> {
        let mut board = TicTacToe::with_reverse(self.dimension, self.reverse);
        let mut current = Player::X;
        let mut moves = 0;
        let mut searches = 0;

        while !board.status().is_terminal() {
            let mv = if self.searches_for(current) {
                let result = run_search(&board, current, self.search.clone(), rng)?;
                searches += 1;
                debug!(
                    player = %current,
                    mv = %result.mv,
                    wins = result.stats.machine_wins,
                    losses = result.stats.other_wins,
                    draws = result.stats.draws,
                    "Machine move"
                );
                result.mv
            } else {
                *board
                    .empty_cells()
                    .choose(rng)
                    .ok_or_else(|| anyhow!("ongoing board has no empty squares"))?
            };

            board.apply_move(mv, current);
            moves += 1;

            if self.show_boards {
                println!("{} plays {}\n{}\n", current, mv, board);
            }

            current = current.opponent();
        }

        Ok(GameRecord {
            status: board.status(),
            moves,
            searches,
        })
    }

    /// Play `games` games and collect the results.
    pub fn play<R: Rng + ?Sized>(&self, games: u32, rng: &mut R) -> Result<MatchStats> {
        let mut stats = MatchStats::new(self.machine);

        for game in 1..=games {
            let record = self.play_game(rng)?;
            let result = match record.status {
                Status::Win(winner) => format!("{} wins", winner),
                Status::Draw => "draw".to_string(),
                Status::Ongoing => "unfinished".to_string(),
            };
            info!(game, moves = record.moves, "Game finished: {}", result);
            stats.record_game(&record);
        }

        Ok(stats)
    }
}
