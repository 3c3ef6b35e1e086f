#![cfg(feature = "std")]

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    config::Difficulty,
    game::{Game, Phase, Winner},
    storage,
};

/// Win/loss record per difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub easy_wins: u32,
    pub easy_losses: u32,
    pub normal_wins: u32,
    pub normal_losses: u32,
    pub hard_wins: u32,
    pub hard_losses: u32,
}

impl Stats {
    /// Load from `path`; any failure gives an all-zero record.
    pub fn load_from(path: &Path) -> Self {
        storage::load_or_default(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        storage::save(path, self)
    }

    fn counters_mut(&mut self, difficulty: Difficulty) -> (&mut u32, &mut u32) {
        match difficulty {
            Difficulty::Easy => (&mut self.easy_wins, &mut self.easy_losses),
            Difficulty::Normal => (&mut self.normal_wins, &mut self.normal_losses),
            Difficulty::Hard => (&mut self.hard_wins, &mut self.hard_losses),
        }
    }

    pub fn record_win(&mut self, difficulty: Difficulty) {
        *self.counters_mut(difficulty).0 += 1;
    }

    pub fn record_loss(&mut self, difficulty: Difficulty) {
        *self.counters_mut(difficulty).1 += 1;
    }

    /// Count a finished game. Returns `false` if it is not over yet.
    pub fn record_outcome(&mut self, game: &Game) -> bool {
        if game.phase() != Phase::GameOver {
            return false;
        }
        match game.winner() {
            Winner::Player => self.record_win(game.difficulty()),
            Winner::Opponent => self.record_loss(game.difficulty()),
            Winner::None => return false,
        }
        true
    }

    pub fn wins(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_wins,
            Difficulty::Normal => self.normal_wins,
            Difficulty::Hard => self.hard_wins,
        }
    }

    pub fn losses(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_losses,
            Difficulty::Normal => self.normal_losses,
            Difficulty::Hard => self.hard_losses,
        }
    }

    pub fn total_games(&self, difficulty: Difficulty) -> u32 {
        self.wins(difficulty) + self.losses(difficulty)
    }

    /// Win rate in percent; 0 when no games were played.
    pub fn win_rate(&self, difficulty: Difficulty) -> f64 {
        match self.total_games(difficulty) {
            0 => 0.0,
            total => f64::from(self.wins(difficulty)) / f64::from(total) * 100.0,
        }
    }
}
