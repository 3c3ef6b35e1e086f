//! Game board: an N×N grid of cell states plus the ships placed on it.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, CellState, Position};
use crate::config::BoardSize;
use crate::ship::{Orientation, Ship, ShipKind};

/// One side's board. The board is the only mutator of its cells and ships.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    grid: Vec<CellState>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(size: BoardSize) -> Self {
        Self::with_size(size.cells())
    }

    /// Empty board with an arbitrary edge length.
    pub fn with_size(size: usize) -> Self {
        Board {
            size,
            grid: alloc::vec![CellState::Empty; size * size],
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// In-bounds check.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        let n = self.size as i32;
        pos.row >= 0 && pos.row < n && pos.col >= 0 && pos.col < n
    }

    /// State of the cell at `pos`; out-of-bounds queries read as `Empty`.
    pub fn cell(&self, pos: Position) -> CellState {
        self.index(pos)
            .map(|i| self.grid[i])
            .unwrap_or(CellState::Empty)
    }

    /// Cells a ship of `length` would cover from `origin` along `orientation`.
    pub fn ship_positions(origin: Position, length: usize, orientation: Orientation) -> Vec<Position> {
        let (dr, dc) = orientation.step();
        (0..length as i32)
            .map(|i| origin.offset(dr * i, dc * i))
            .collect()
    }

    /// Validate a placement without touching the board.
    pub fn check_placement(
        &self,
        origin: Position,
        length: usize,
        orientation: Orientation,
    ) -> Result<Vec<Position>, BoardError> {
        if !self.is_valid_position(origin) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let start = match orientation {
            Orientation::Horizontal => origin.col as usize,
            Orientation::Vertical => origin.row as usize,
        };
        match start.checked_add(length) {
            Some(end) if end <= self.size => {}
            _ => return Err(BoardError::ShipOutOfBounds),
        }
        let positions = Self::ship_positions(origin, length, orientation);
        for &p in &positions {
            match self.index(p) {
                None => return Err(BoardError::ShipOutOfBounds),
                Some(i) if self.grid[i] == CellState::Ship => {
                    return Err(BoardError::ShipOverlaps)
                }
                Some(_) => {}
            }
        }
        Ok(positions)
    }

    pub fn can_place_ship(&self, origin: Position, length: usize, orientation: Orientation) -> bool {
        self.check_placement(origin, length, orientation).is_ok()
    }

    /// Place `ship` at `origin`, recording its cells. The board is left
    /// untouched on error.
    pub fn try_place_ship(
        &mut self,
        mut ship: Ship,
        origin: Position,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let positions = self.check_placement(origin, ship.length(), orientation)?;
        for &p in &positions {
            if let Some(i) = self.index(p) {
                self.grid[i] = CellState::Ship;
            }
        }
        ship.set_positions(positions);
        log::trace!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    pub fn place_ship(&mut self, ship: Ship, origin: Position, orientation: Orientation) -> bool {
        self.try_place_ship(ship, origin, orientation).is_ok()
    }

    /// Place a fresh ship of `kind` at a random spot, retrying until a
    /// placement is accepted.
    ///
    /// There is no retry cap: the fleet covers at most 17 of 64 cells, so a
    /// valid spot always exists for the supported board sizes.
    pub fn place_randomly<R: Rng + ?Sized>(&mut self, kind: ShipKind, rng: &mut R) -> (Position, Orientation) {
        let n = self.size as i32;
        loop {
            let origin = Position::new(rng.random_range(0..n), rng.random_range(0..n));
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.place_ship(Ship::new(kind), origin, orientation) {
                return (origin, orientation);
            }
        }
    }

    /// Attack `pos`.
    ///
    /// Returns `(hit, ship)`. Out-of-bounds or already resolved cells are
    /// ignored and read as `(false, None)` with no change to the board.
    pub fn attack(&mut self, pos: Position) -> (bool, Option<&Ship>) {
        let Some(i) = self.index(pos) else {
            return (false, None);
        };
        let state = self.grid[i];
        match state {
            CellState::Hit | CellState::Miss => (false, None),
            CellState::Empty => {
                self.grid[i] = CellState::Miss;
                (false, None)
            }
            CellState::Ship => {
                self.grid[i] = CellState::Hit;
                match self.ships.iter_mut().find(|s| s.contains(pos)) {
                    Some(ship) => {
                        ship.register_hit(pos);
                        (true, Some(&*ship))
                    }
                    // cannot happen while the grid and ship list agree
                    None => (true, None),
                }
            }
        }
    }

    /// `true` when at least one ship is placed and every ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.len() - self.ships_sunk()
    }

    /// All in-bounds positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let n = self.size as i32;
        (0..n).flat_map(move |r| (0..n).map(move |c| Position::new(r, c)))
    }

    /// Positions that have not been attacked yet.
    pub fn unresolved(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| !self.cell(p).is_resolved())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let ch = match self.grid[r * self.size + c] {
                    CellState::Empty => '.',
                    CellState::Ship => 'S',
                    CellState::Miss => 'o',
                    CellState::Hit => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "ships: {:?}", self.ships)
    }
}
