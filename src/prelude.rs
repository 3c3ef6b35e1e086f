//! Commonly used types for ease of import.

pub use crate::{
    BoardSize, Difficulty, Game, GameSettings, Orientation, Phase, Position, Session, ShipKind,
    Winner,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Achievements, Stats};
