//! Target selection for the computer opponent.
//! Pure functions over the attacked board's cell states; the caller owns the
//! random source.

use rand::Rng;

use crate::{
    board::Board,
    common::{CellState, Position},
    config::Difficulty,
};

/// Orthogonal neighbours in hunt order: up, down, left, right.
const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// In bounds and not yet attacked.
fn is_open(board: &Board, pos: Position) -> bool {
    board.is_valid_position(pos) && !board.cell(pos).is_resolved()
}

fn hits(board: &Board) -> impl Iterator<Item = Position> + '_ {
    board
        .positions()
        .filter(move |&p| board.cell(p) == CellState::Hit)
}

fn neighbours(pos: Position) -> [Position; 4] {
    NEIGHBOURS.map(|(dr, dc)| pos.offset(dr, dc))
}

/// Pick the next cell to attack on `board` for the given difficulty.
///
/// The result is never a Hit or Miss cell. `None` only when every cell has
/// already been attacked.
pub fn select_target<R: Rng + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => easy_target(board, rng),
        Difficulty::Normal => normal_target(board, rng),
        Difficulty::Hard => hard_target(board, rng),
    }
}

/// Uniform random choice by rejection sampling over the whole grid.
pub fn easy_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.unresolved().next()?;
    let n = board.size() as i32;
    loop {
        let pos = Position::new(rng.random_range(0..n), rng.random_range(0..n));
        if !board.cell(pos).is_resolved() {
            return Some(pos);
        }
    }
}

/// Follow up the first hit (row-major) that still has an open neighbour,
/// trying its neighbours in shuffled order. Falls back to [`easy_target`].
pub fn normal_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    for hit in hits(board) {
        let mut adjacent = neighbours(hit);
        for i in 0..adjacent.len() {
            let j = rng.random_range(0..=i);
            adjacent.swap(i, j);
        }
        if let Some(pos) = adjacent.into_iter().find(|&p| is_open(board, p)) {
            return Some(pos);
        }
    }
    easy_target(board, rng)
}

/// Line-aware hunting.
///
/// 1. Two hits in a row: extend the line (right by two, else left by one;
///    down by two, else up by one).
/// 2. Any hit: first open neighbour in up/down/left/right order.
/// 3. Parity hunt over cells with even `row + col`.
/// 4. [`easy_target`].
pub fn hard_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    for hit in hits(board) {
        if board.cell(hit.offset(0, 1)) == CellState::Hit {
            for pos in [hit.offset(0, 2), hit.offset(0, -1)] {
                if is_open(board, pos) {
                    return Some(pos);
                }
            }
        }
        if board.cell(hit.offset(1, 0)) == CellState::Hit {
            for pos in [hit.offset(2, 0), hit.offset(-1, 0)] {
                if is_open(board, pos) {
                    return Some(pos);
                }
            }
        }
    }

    for hit in hits(board) {
        if let Some(pos) = neighbours(hit).into_iter().find(|&p| is_open(board, p)) {
            return Some(pos);
        }
    }

    if let Some(pos) = board
        .unresolved()
        .find(|p| (p.row + p.col) % 2 == 0)
    {
        return Some(pos);
    }

    easy_target(board, rng)
}
