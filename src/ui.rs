#![cfg(feature = "std")]

//! Plain-text board rendering and coordinate parsing for the terminal.

use std::fmt::Write;

use crate::{
    board::Board,
    common::{CellState, Position},
    game::{Game, Phase},
};

/// Format a position as `A1`-style text.
pub fn coord_to_string(pos: Position) -> String {
    let col = (b'A' + pos.col as u8) as char;
    format!("{}{}", col, pos.row + 1)
}

/// Parse `A5`, `c10`, ... into a position. Bounds are not checked.
pub fn parse_coord(input: &str) -> Option<Position> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: i32 = chars.as_str().parse().ok()?;
    if row < 1 {
        return None;
    }
    Some(Position::new(row - 1, (col_ch as u8 - b'A') as i32))
}

fn header(out: &mut String, size: usize) {
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
}

/// Render `board`. Ships are shown only with `reveal`; `queued` cells are
/// drawn as `*`.
pub fn render_board(board: &Board, reveal: bool, queued: &[Position]) -> String {
    let mut out = String::new();
    header(&mut out, board.size());
    for r in 0..board.size() as i32 {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..board.size() as i32 {
            let pos = Position::new(r, c);
            let ch = match board.cell(pos) {
                CellState::Hit => 'X',
                CellState::Miss => 'o',
                _ if queued.contains(&pos) => '*',
                CellState::Ship if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Both boards plus fleet status and the status line.
pub fn render_game(game: &Game) -> String {
    let mut out = String::new();
    out.push_str("Enemy waters:\n");
    out.push_str(&render_board(game.computer_board(), false, game.pending_salvo()));
    let _ = writeln!(
        out,
        "Enemy ships afloat: {}",
        game.computer_board().ships_afloat()
    );
    out.push_str("\nYour fleet:\n");
    out.push_str(&render_board(game.player_board(), true, &[]));
    for ship in game.player_board().ships() {
        let _ = writeln!(
            out,
            "  {:<10} {}/{}{}",
            ship.name(),
            ship.damage(),
            ship.length(),
            if ship.is_sunk() { " sunk" } else { "" }
        );
    }
    if !game.last_message().is_empty() {
        let _ = writeln!(out, "\n{}", game.last_message());
    }
    out
}

/// One-line prompt for the current phase.
pub fn prompt(game: &Game) -> String {
    match game.phase() {
        Phase::MainMenu => {
            let s = game.settings();
            format!(
                "Menu [size {} | {} | salvo {}] (size <8|10|12>, difficulty <easy|normal|hard>, salvo, start, quit)",
                s.board_size.cells(),
                s.difficulty.name(),
                if s.salvo { "on" } else { "off" }
            )
        }
        Phase::Placement => match game.current_ship_for_placement() {
            Some(kind) => format!(
                "Place {} (length {}) as `<coord> [h|v]`, or `random`",
                kind,
                kind.length()
            ),
            None => String::new(),
        },
        Phase::PlayerTurn if game.salvo_mode() => format!(
            "Queue targets ({} of {}) then `fire`",
            game.pending_salvo().len(),
            game.salvo_allowance(crate::game::Side::Player)
        ),
        Phase::PlayerTurn => String::from("Enter target"),
        Phase::ComputerTurn => format!("The enemy is {}...", game.thinking().to_lowercase()),
        Phase::GameOver => String::from("Game over (`new`, `menu` or `quit`)"),
    }
}
