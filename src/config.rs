use core::time::Duration;

use crate::ship::ShipKind;

pub const NUM_SHIPS: usize = 5;

/// The fleet, in placement order.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Pause between the player's shot and the computer's reply.
pub const THINKING_DELAY: Duration = Duration::from_millis(800);

/// Flavor text shown while the computer "thinks".
pub const THINKING_MESSAGES: [&str; 12] = [
    "Pondering",
    "Hatching a plan",
    "Simmering",
    "Meandering",
    "Contemplating",
    "Channelling",
    "Strategizing",
    "Calculating",
    "Analyzing",
    "Reasoning",
    "Deliberating",
    "Ruminating",
];

/// Supported board edge lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardSize {
    Small,
    #[default]
    Standard,
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Standard, BoardSize::Large];

    /// Number of rows (and columns).
    pub const fn cells(self) -> usize {
        match self {
            BoardSize::Small => 8,
            BoardSize::Standard => 10,
            BoardSize::Large => 12,
        }
    }

    pub fn cycle_next(self) -> Self {
        match self {
            BoardSize::Small => BoardSize::Standard,
            BoardSize::Standard => BoardSize::Large,
            BoardSize::Large => BoardSize::Small,
        }
    }

    pub fn cycle_prev(self) -> Self {
        match self {
            BoardSize::Small => BoardSize::Large,
            BoardSize::Standard => BoardSize::Small,
            BoardSize::Large => BoardSize::Standard,
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = usize;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            8 => Ok(BoardSize::Small),
            10 => Ok(BoardSize::Standard),
            12 => Ok(BoardSize::Large),
            other => Err(other),
        }
    }
}

/// Computer opponent strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn cycle_next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn cycle_prev(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Normal => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Normal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Options chosen in the main menu before a game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSettings {
    pub board_size: BoardSize,
    pub difficulty: Difficulty,
    pub salvo: bool,
}

impl GameSettings {
    pub fn new(board_size: BoardSize, difficulty: Difficulty, salvo: bool) -> Self {
        Self {
            board_size,
            difficulty,
            salvo,
        }
    }
}
