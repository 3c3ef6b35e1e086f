//! Ship definitions and per-cell damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Position;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Unit step `(dr, dc)` along this orientation.
    pub(crate) fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// The five ship classes of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser | ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fleet unit. Positions stay empty until the board accepts a placement;
/// afterwards `positions` and `hits` are parallel and both `length()` long.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    positions: Vec<Position>,
    hits: Vec<bool>,
}

impl Ship {
    /// Fresh, unplaced ship of the given kind.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            positions: Vec::new(),
            hits: alloc::vec![false; kind.length()],
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Cells occupied by the ship, bow first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Damage mask indexed like [`Ship::positions`].
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    pub fn is_placed(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Mark the segment at `pos` as hit. Returns `false` if `pos` is not
    /// part of this ship.
    pub fn register_hit(&mut self, pos: Position) -> bool {
        match self.positions.iter().position(|&p| p == pos) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Sunk once every segment is hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    /// Number of segments hit so far.
    pub fn damage(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }

    pub(crate) fn set_positions(&mut self, positions: Vec<Position>) {
        self.hits = alloc::vec![false; positions.len()];
        self.positions = positions;
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {:?}, hits: {}/{} }}",
            self.name(),
            self.positions.first(),
            self.damage(),
            self.length(),
        )
    }
}
