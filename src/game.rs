//! Turn-based game between the human player and the computer.
//!
//! `Game` owns both boards, the phase state machine and the random source.
//! Every mutating call checks the phase first; calls that do not belong to
//! the current phase are rejected without touching any state.

use alloc::{format, string::String, vec::Vec};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::Board,
    common::Position,
    config::{BoardSize, Difficulty, GameSettings, FLEET, NUM_SHIPS, THINKING_MESSAGES},
    player::{AiPlayer, Player},
    ship::{Orientation, ShipKind},
};

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    MainMenu,
    Placement,
    PlayerTurn,
    ComputerTurn,
    GameOver,
}

/// Who won, if anyone yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    #[default]
    None,
    Player,
    Opponent,
}

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// Result of a single resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    Miss,
    Hit,
    /// The shot sank a ship of the given kind.
    Sunk(ShipKind),
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

fn shoot(board: &mut Board, pos: Position) -> ShotResult {
    match board.attack(pos) {
        (true, Some(ship)) if ship.is_sunk() => ShotResult::Sunk(ship.kind()),
        (true, _) => ShotResult::Hit,
        (false, _) => ShotResult::Miss,
    }
}

/// Summary text for several shots fired in one turn.
fn salvo_summary(prefix: &str, results: &[ShotResult]) -> String {
    let hits = results.iter().filter(|r| r.is_hit()).count();
    let mut msg = format!("{}: {} hit(s), {} miss(es)", prefix, hits, results.len() - hits);
    let sunk: Vec<&str> = results
        .iter()
        .filter_map(|r| match r {
            ShotResult::Sunk(kind) => Some(kind.name()),
            _ => None,
        })
        .collect();
    if !sunk.is_empty() {
        msg.push_str(" - sunk ");
        msg.push_str(&sunk.join(", "));
    }
    msg
}

/// Core game state.
pub struct Game {
    player_board: Board,
    computer_board: Board,
    phase: Phase,
    settings: GameSettings,
    current_ship: usize,
    winner: Winner,
    last_message: String,
    thinking: &'static str,
    rng: SmallRng,
    computer: AiPlayer,
    salvo_queue: Vec<Position>,
    last_computer_targets: Vec<Position>,
    turn: u32,
    player_shots: usize,
    player_hits: usize,
    hit_streak: usize,
    clean_sinks: usize,
}

impl Game {
    /// Start a game in the placement phase. The computer fleet is placed
    /// before this returns.
    pub fn new(settings: GameSettings, rng: SmallRng) -> Self {
        let size = settings.board_size;
        let mut game = Game {
            player_board: Board::new(size),
            computer_board: Board::new(size),
            phase: Phase::Placement,
            settings,
            current_ship: 0,
            winner: Winner::None,
            last_message: String::new(),
            thinking: "",
            rng,
            computer: AiPlayer::new(settings.difficulty),
            salvo_queue: Vec::new(),
            last_computer_targets: Vec::new(),
            turn: 0,
            player_shots: 0,
            player_hits: 0,
            hit_streak: 0,
            clean_sinks: 0,
        };
        game.computer.place_ships(&mut game.rng, &mut game.computer_board);
        log::debug!(
            "new game: {:?} {:?} salvo={}",
            size,
            settings.difficulty,
            settings.salvo
        );
        game
    }

    /// Reproducible game from a fixed seed.
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::new(settings, SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(settings: GameSettings) -> Self {
        Self::new(settings, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Idle game shown behind the main menu. All play calls are rejected.
    pub fn main_menu(settings: GameSettings, rng: SmallRng) -> Self {
        let mut game = Self::new(settings, rng);
        game.phase = Phase::MainMenu;
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn board_size(&self) -> BoardSize {
        self.settings.board_size
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn salvo_mode(&self) -> bool {
        self.settings.salvo
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Status line describing the last transition.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    /// Flavor text chosen when the computer's turn began.
    pub fn thinking(&self) -> &'static str {
        self.thinking
    }

    /// Player shots queued for the current salvo.
    pub fn pending_salvo(&self) -> &[Position] {
        &self.salvo_queue
    }

    /// Cells the computer fired at on its most recent turn.
    pub fn last_computer_targets(&self) -> &[Position] {
        &self.last_computer_targets
    }

    /// Number of times the computer's turn has started.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Shots the player has resolved against the computer board.
    pub fn player_shots(&self) -> usize {
        self.player_shots
    }

    pub fn player_hits(&self) -> usize {
        self.player_hits
    }

    /// Enemy ships sunk by an unbroken run of hits as long as the ship.
    pub fn clean_sinks(&self) -> usize {
        self.clean_sinks
    }

    /// The ship awaiting placement, if any.
    pub fn current_ship_for_placement(&self) -> Option<ShipKind> {
        FLEET.get(self.current_ship).copied()
    }

    /// Ships still to place, in order.
    pub fn ships_to_place(&self) -> &[ShipKind] {
        &FLEET[self.current_ship.min(NUM_SHIPS)..]
    }

    /// Place the current ship of the player's fleet.
    pub fn place_player_ship(&mut self, pos: Position, orientation: Orientation) -> bool {
        if self.phase != Phase::Placement {
            return false;
        }
        let Some(kind) = self.current_ship_for_placement() else {
            return false;
        };
        let ship = crate::ship::Ship::new(kind);
        if let Err(e) = self.player_board.try_place_ship(ship, pos, orientation) {
            log::debug!("rejected {} at {:?}: {}", kind, pos, e);
            return false;
        }
        self.current_ship += 1;
        if self.current_ship == NUM_SHIPS {
            self.phase = Phase::PlayerTurn;
            self.last_message = String::from("All ships placed! Your turn to attack!");
        }
        true
    }

    /// Place every remaining player ship at random.
    pub fn auto_place_player_ships(&mut self) -> bool {
        if self.phase != Phase::Placement {
            return false;
        }
        while let Some(kind) = self.current_ship_for_placement() {
            let (origin, orientation) = self.player_board.place_randomly(kind, &mut self.rng);
            log::debug!("auto placed {} at {:?} {:?}", kind, origin, orientation);
            self.current_ship += 1;
        }
        self.phase = Phase::PlayerTurn;
        self.last_message = String::from("All ships placed! Your turn to attack!");
        true
    }

    /// Shots a side may fire per salvo: its own ships still afloat, at
    /// least one.
    pub fn salvo_allowance(&self, side: Side) -> usize {
        let board = match side {
            Side::Player => &self.player_board,
            Side::Opponent => &self.computer_board,
        };
        board.ships_afloat().max(1)
    }

    /// Attack the computer board at `pos`.
    ///
    /// In salvo mode this queues (or un-queues) the cell instead; use
    /// [`Game::fire_salvo`] to resolve the queue. A single shot at an
    /// out-of-bounds or already attacked cell changes nothing on the board
    /// but still counts as a miss and ends the turn.
    pub fn player_attack(&mut self, pos: Position) -> bool {
        if self.phase != Phase::PlayerTurn {
            return false;
        }
        if self.settings.salvo {
            return self.toggle_salvo_shot(pos);
        }
        let result = self.player_shot(pos);
        self.last_message = match result {
            ShotResult::Miss => String::from("Miss!"),
            ShotResult::Hit => String::from("Hit!"),
            ShotResult::Sunk(kind) => format!("Hit! You sunk the enemy {}!", kind),
        };
        self.end_player_turn();
        true
    }

    fn toggle_salvo_shot(&mut self, pos: Position) -> bool {
        let allowance = self.salvo_allowance(Side::Player);
        if let Some(i) = self.salvo_queue.iter().position(|&p| p == pos) {
            self.salvo_queue.remove(i);
        } else {
            if !self.computer_board.is_valid_position(pos)
                || self.computer_board.cell(pos).is_resolved()
                || self.salvo_queue.len() >= allowance
            {
                return false;
            }
            self.salvo_queue.push(pos);
        }
        self.last_message = format!("Salvo: {}/{} shots queued", self.salvo_queue.len(), allowance);
        true
    }

    /// Resolve every queued salvo shot, then hand the turn over.
    pub fn fire_salvo(&mut self) -> bool {
        if self.phase != Phase::PlayerTurn || !self.settings.salvo || self.salvo_queue.is_empty() {
            return false;
        }
        let queue = core::mem::take(&mut self.salvo_queue);
        let mut results = Vec::with_capacity(queue.len());
        for pos in queue {
            results.push(self.player_shot(pos));
            if self.computer_board.all_ships_sunk() {
                break;
            }
        }
        self.last_message = salvo_summary("Salvo", &results);
        self.end_player_turn();
        true
    }

    fn player_shot(&mut self, pos: Position) -> ShotResult {
        let result = shoot(&mut self.computer_board, pos);
        self.player_shots += 1;
        if result.is_hit() {
            self.player_hits += 1;
            self.hit_streak += 1;
        } else {
            self.hit_streak = 0;
        }
        if let ShotResult::Sunk(kind) = result {
            if self.hit_streak >= kind.length() {
                self.clean_sinks += 1;
            }
        }
        log::trace!("player shot {:?}: {:?}", pos, result);
        result
    }

    fn end_player_turn(&mut self) {
        if self.computer_board.all_ships_sunk() {
            self.phase = Phase::GameOver;
            self.winner = Winner::Player;
            self.last_message = String::from("Victory! You sunk the enemy fleet!");
            log::info!("player won after {} shots", self.player_shots);
            return;
        }
        self.phase = Phase::ComputerTurn;
        self.turn += 1;
        self.thinking = self.random_thinking_message();
    }

    /// Pick a flavor word for the computer's thinking pause.
    pub fn random_thinking_message(&mut self) -> &'static str {
        THINKING_MESSAGES[self.rng.random_range(0..THINKING_MESSAGES.len())]
    }

    /// Let the computer fire (one shot, or a full salvo in salvo mode).
    pub fn computer_attack(&mut self) {
        if self.phase != Phase::ComputerTurn {
            return;
        }
        let shots = if self.settings.salvo {
            self.salvo_allowance(Side::Opponent)
        } else {
            1
        };
        self.last_computer_targets.clear();
        let mut results = Vec::with_capacity(shots);
        for _ in 0..shots {
            let Some(pos) = self.computer.select_target(&mut self.rng, &self.player_board) else {
                break;
            };
            let result = shoot(&mut self.player_board, pos);
            log::trace!("computer shot {:?}: {:?}", pos, result);
            self.last_computer_targets.push(pos);
            results.push(result);
            if self.player_board.all_ships_sunk() {
                break;
            }
        }

        self.last_message = match results.as_slice() {
            [ShotResult::Sunk(kind)] => format!("The enemy sunk your {}!", kind),
            [ShotResult::Hit] => String::from("The enemy hit your ship!"),
            [ShotResult::Miss] => String::from("The enemy missed!"),
            many => salvo_summary("Enemy salvo", many),
        };

        if self.player_board.all_ships_sunk() {
            self.phase = Phase::GameOver;
            self.winner = Winner::Opponent;
            self.last_message = String::from("Defeat! All your ships were sunk!");
            log::info!("computer won on turn {}", self.turn);
            return;
        }
        self.phase = Phase::PlayerTurn;
    }
}

impl core::fmt::Debug for Game {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("settings", &self.settings)
            .field("current_ship", &self.current_ship)
            .field("winner", &self.winner)
            .field("last_message", &self.last_message)
            .field("player_board", &self.player_board)
            .field("computer_board", &self.computer_board)
            .finish()
    }
}
