use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Board,
    common::Position,
    config::{Difficulty, FLEET},
};

/// Interface implemented by automated sides of a game.
pub trait Player {
    /// Place the whole fleet onto the provided board.
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board);

    /// Choose the next cell to attack on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Position>;
}

/// Computer player: random fleet placement and tiered targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) {
        for kind in FLEET {
            let (origin, orientation) = board.place_randomly(kind, rng);
            log::debug!("ai placed {} at {:?} {:?}", kind, origin, orientation);
        }
    }

    fn select_target(&mut self, rng: &mut SmallRng, target: &Board) -> Option<Position> {
        ai::select_target(self.difficulty, target, rng)
    }
}
