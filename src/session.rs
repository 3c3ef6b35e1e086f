//! Menu settings plus the current game, with a guard against computer turns
//! scheduled for a game that has since been replaced.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    config::{BoardSize, Difficulty, GameSettings},
    game::{Game, Phase},
};

/// Handle for one pending computer turn.
///
/// Only the ticket issued for the live game's current turn is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTicket {
    generation: u64,
    turn: u32,
}

pub struct Session {
    settings: GameSettings,
    game: Game,
    generation: u64,
    seeder: SmallRng,
}

impl Session {
    /// Session sitting in the main menu. Every game it creates derives its
    /// own random source from `seed`.
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        let mut seeder = SmallRng::seed_from_u64(seed);
        let game = Game::main_menu(settings, SmallRng::seed_from_u64(seeder.random()));
        Self {
            settings,
            game,
            generation: 0,
            seeder,
        }
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(settings: GameSettings) -> Self {
        Self::new(settings, rand::rng().random())
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Bumped every time the game is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn in_menu(&self) -> bool {
        self.game.phase() == Phase::MainMenu
    }

    pub fn set_board_size(&mut self, size: BoardSize) -> bool {
        if !self.in_menu() {
            return false;
        }
        self.settings.board_size = size;
        true
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if !self.in_menu() {
            return false;
        }
        self.settings.difficulty = difficulty;
        true
    }

    pub fn set_salvo(&mut self, salvo: bool) -> bool {
        if !self.in_menu() {
            return false;
        }
        self.settings.salvo = salvo;
        true
    }

    fn replace_game(&mut self, game: Game) {
        self.game = game;
        self.generation += 1;
    }

    fn next_rng(&mut self) -> SmallRng {
        SmallRng::seed_from_u64(self.seeder.random())
    }

    /// Leave the main menu and begin placement with the chosen settings.
    pub fn start_game(&mut self) -> bool {
        if !self.in_menu() {
            return false;
        }
        self.new_game();
        true
    }

    /// Throw away the current game and start a fresh one.
    pub fn new_game(&mut self) {
        let rng = self.next_rng();
        self.replace_game(Game::new(self.settings, rng));
        log::debug!("session generation {}", self.generation);
    }

    /// Throw away the current game and go back to the menu.
    pub fn return_to_menu(&mut self) {
        let rng = self.next_rng();
        self.replace_game(Game::main_menu(self.settings, rng));
    }

    /// Ticket for the computer turn that is waiting to be played, if any.
    pub fn computer_turn_ticket(&self) -> Option<TurnTicket> {
        (self.game.phase() == Phase::ComputerTurn).then(|| TurnTicket {
            generation: self.generation,
            turn: self.game.turn(),
        })
    }

    /// Play the computer turn for `ticket`. Tickets from a replaced game or
    /// an earlier turn are discarded.
    pub fn resolve_computer_turn(&mut self, ticket: TurnTicket) -> bool {
        if ticket.generation != self.generation || ticket.turn != self.game.turn() {
            log::debug!("discarding stale computer turn {:?}", ticket);
            return false;
        }
        if self.game.phase() != Phase::ComputerTurn {
            return false;
        }
        self.game.computer_attack();
        true
    }
}
