#![cfg(feature = "std")]

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    config::{BoardSize, Difficulty},
    game::{Game, Winner},
    storage,
};

/// Identifier of a single achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstBlood,
    PerfectGame,
    Domination,
    Sharpshooter,
    ComebackKing,
    HardcoreVictor,
    SalvoMaster,
    Efficient,
    LuckyShot,
    SmallBoardWin,
    LargeBoardWin,
}

impl AchievementId {
    pub const ALL: [AchievementId; 11] = [
        AchievementId::FirstBlood,
        AchievementId::PerfectGame,
        AchievementId::Domination,
        AchievementId::Sharpshooter,
        AchievementId::ComebackKing,
        AchievementId::HardcoreVictor,
        AchievementId::SalvoMaster,
        AchievementId::Efficient,
        AchievementId::LuckyShot,
        AchievementId::SmallBoardWin,
        AchievementId::LargeBoardWin,
    ];

    /// `(key, name, description)`
    fn describe(self) -> (&'static str, &'static str, &'static str) {
        match self {
            AchievementId::FirstBlood => ("first_blood", "First Blood", "Win your first game"),
            AchievementId::PerfectGame => ("perfect_game", "Perfect Game", "Win without losing any ships"),
            AchievementId::Domination => ("domination", "Domination", "Win with all ships at full health"),
            AchievementId::Sharpshooter => ("sharpshooter", "Sharpshooter", "Win with 90%+ accuracy"),
            AchievementId::ComebackKing => ("comeback_king", "Comeback King", "Win after losing 4 ships"),
            AchievementId::HardcoreVictor => ("hardcore_victor", "Hardcore Victor", "Beat Hard difficulty"),
            AchievementId::SalvoMaster => ("salvo_master", "Salvo Master", "Win in Salvo mode"),
            AchievementId::Efficient => ("efficient", "Efficient", "Win in under 50 shots"),
            AchievementId::LuckyShot => ("lucky_shot", "Lucky Shot", "Sink a ship without missing in between"),
            AchievementId::SmallBoardWin => ("small_board_win", "Compact Commander", "Win on 8x8 board"),
            AchievementId::LargeBoardWin => ("large_board_win", "Admiral of the Seas", "Win on 12x12 board"),
        }
    }
}

/// Catalogue entry, as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Persisted unlock flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    pub first_blood: bool,
    pub perfect_game: bool,
    pub domination: bool,
    pub sharpshooter: bool,
    pub comeback_king: bool,
    pub hardcore_victor: bool,
    pub salvo_master: bool,
    pub efficient: bool,
    pub lucky_shot: bool,
    pub small_board_win: bool,
    pub large_board_win: bool,
}

impl Achievements {
    pub fn load_from(path: &Path) -> Self {
        storage::load_or_default(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        storage::save(path, self)
    }

    fn flag_mut(&mut self, id: AchievementId) -> &mut bool {
        match id {
            AchievementId::FirstBlood => &mut self.first_blood,
            AchievementId::PerfectGame => &mut self.perfect_game,
            AchievementId::Domination => &mut self.domination,
            AchievementId::Sharpshooter => &mut self.sharpshooter,
            AchievementId::ComebackKing => &mut self.comeback_king,
            AchievementId::HardcoreVictor => &mut self.hardcore_victor,
            AchievementId::SalvoMaster => &mut self.salvo_master,
            AchievementId::Efficient => &mut self.efficient,
            AchievementId::LuckyShot => &mut self.lucky_shot,
            AchievementId::SmallBoardWin => &mut self.small_board_win,
            AchievementId::LargeBoardWin => &mut self.large_board_win,
        }
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        let mut flags = *self;
        *flags.flag_mut(id)
    }

    fn entry(&self, id: AchievementId) -> Achievement {
        let (key, name, description) = id.describe();
        Achievement {
            id,
            key,
            name,
            description,
            unlocked: self.is_unlocked(id),
        }
    }

    /// Every achievement with its current state.
    pub fn all(&self) -> Vec<Achievement> {
        AchievementId::ALL.iter().map(|&id| self.entry(id)).collect()
    }

    /// Unlock whatever the finished `game` earned. Only player victories
    /// count. Returns the achievements unlocked by this call.
    pub fn check_and_unlock(&mut self, game: &Game) -> Vec<Achievement> {
        if game.winner() != Winner::Player {
            return Vec::new();
        }
        let own = game.player_board();
        let ships_lost = own.ships_sunk();
        let untouched = own.ships().iter().all(|s| s.damage() == 0);
        let shots = game.player_shots();
        let accurate = shots > 0 && game.player_hits() * 100 >= shots * 90;

        let earned = [
            (AchievementId::FirstBlood, true),
            (AchievementId::PerfectGame, ships_lost == 0),
            (AchievementId::Domination, untouched),
            (AchievementId::Sharpshooter, accurate),
            (AchievementId::ComebackKing, ships_lost >= 4),
            (AchievementId::HardcoreVictor, game.difficulty() == Difficulty::Hard),
            (AchievementId::SalvoMaster, game.salvo_mode()),
            (AchievementId::Efficient, shots < 50),
            (AchievementId::LuckyShot, game.clean_sinks() > 0),
            (AchievementId::SmallBoardWin, game.board_size() == BoardSize::Small),
            (AchievementId::LargeBoardWin, game.board_size() == BoardSize::Large),
        ];

        let mut unlocked = Vec::new();
        for (id, condition) in earned {
            let flag = self.flag_mut(id);
            if condition && !*flag {
                *flag = true;
                unlocked.push(self.entry(id));
            }
        }
        if !unlocked.is_empty() {
            log::info!("unlocked {} achievement(s)", unlocked.len());
        }
        unlocked
    }
}
