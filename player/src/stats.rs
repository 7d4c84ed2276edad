//! Match statistics tracking and persistence.
//!
//! Results are counted from the point of view of the configured machine
//! side and can be written to a JSON summary file.

use anyhow::{Context, Result};
use engine_core::{Player, Status};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::game::GameRecord;

/// Aggregated results of a match.
#[derive(Debug)]
pub struct MatchStats {
    /// Side whose results are counted as wins
    machine: Player,
    games: u32,
    machine_wins: u32,
    opponent_wins: u32,
    draws: u32,
    /// Moves across all games for average calculation
    total_moves: u64,
    /// Monte Carlo searches across all games
    total_searches: u64,
    start_time: Instant,
}

/// Serializable summary for JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchSummary {
    pub machine: String,
    pub opponent: String,
    pub dimension: usize,
    pub reverse: bool,
    pub trials: u32,
    pub workers: usize,
    pub games: u32,
    pub machine_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    pub machine_win_rate: f64,
    pub avg_game_length: f64,
    pub total_searches: u64,
    pub runtime_seconds: f64,
    pub timestamp: u64,
}

impl MatchStats {
    pub fn new(machine: Player) -> Self {
        Self {
            machine,
            games: 0,
            machine_wins: 0,
            opponent_wins: 0,
            draws: 0,
            total_moves: 0,
            total_searches: 0,
            start_time: Instant::now(),
        }
    }

    /// Record a finished game.
    pub fn record_game(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_moves += record.moves as u64;
        self.total_searches += record.searches as u64;

        match record.status {
            Status::Win(winner) if winner == self.machine => self.machine_wins += 1,
            Status::Win(_) => self.opponent_wins += 1,
            Status::Draw => self.draws += 1,
            Status::Ongoing => warn!(moves = record.moves, "Recorded a game that never finished"),
        }
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn machine_wins(&self) -> u32 {
        self.machine_wins
    }

    pub fn opponent_wins(&self) -> u32 {
        self.opponent_wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn machine_win_rate(&self) -> f64 {
        if self.games > 0 {
            self.machine_wins as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn avg_game_length(&self) -> f64 {
        if self.games > 0 {
            self.total_moves as f64 / self.games as f64
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        info!(
            machine = %self.machine,
            games = self.games,
            machine_wins = self.machine_wins,
            opponent_wins = self.opponent_wins,
            draws = self.draws,
            win_rate = format!("{:.1}%", self.machine_win_rate() * 100.0),
            avg_game_length = format!("{:.2}", self.avg_game_length()),
            runtime_secs = format!("{:.2}", self.start_time.elapsed().as_secs_f64()),
            "Match finished"
        );
    }

    /// Get a snapshot of the current results.
    pub fn snapshot(&self, config: &Config) -> MatchSummary {
        MatchSummary {
            machine: self.machine.to_string(),
            opponent: config.opponent.clone(),
            dimension: config.dimension,
            reverse: config.reverse,
            trials: config.trials,
            workers: config.workers,
            games: self.games,
            machine_wins: self.machine_wins,
            opponent_wins: self.opponent_wins,
            draws: self.draws,
            machine_win_rate: self.machine_win_rate(),
            avg_game_length: self.avg_game_length(),
            total_searches: self.total_searches,
            runtime_seconds: self.start_time.elapsed().as_secs_f64(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }
}

impl MatchSummary {
    /// Write the summary as JSON (atomic write-then-rename).
    pub fn write_to(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize match summary")?;

        // Write to temp file then rename (atomic on most filesystems)
        let temp_path = format!("{}.tmp", path);
        let mut file = fs::File::create(&temp_path)
            .with_context(|| format!("Failed to create {}", temp_path))?;
        file.write_all(json.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path))?;

        if let Err(e) = fs::rename(&temp_path, path) {
            // Try to clean up temp file
            let _ = fs::remove_file(&temp_path);
            return Err(e).with_context(|| format!("Failed to rename stats file to {}", path));
        }

        debug!("Wrote match summary to {}", path);
        Ok(())
    }
}
