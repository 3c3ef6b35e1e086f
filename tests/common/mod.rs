#![allow(dead_code)]

use broadside::{Game, Orientation, Phase, Position, FLEET};

/// Place the player's fleet one ship per row, starting in column 0.
pub fn place_fleet_in_rows(game: &mut Game) {
    for row in 0..FLEET.len() {
        assert!(game.place_player_ship(Position::new(row as i32, 0), Orientation::Horizontal));
    }
}

/// Cells of every computer ship, in fleet order.
pub fn computer_ship_cells(game: &Game) -> Vec<Position> {
    game.computer_board()
        .ships()
        .iter()
        .flat_map(|s| s.positions().to_vec())
        .collect()
}

/// Fire at every computer ship cell, letting the computer answer in between.
pub fn play_to_victory(game: &mut Game) {
    for pos in computer_ship_cells(game) {
        assert!(game.player_attack(pos), "attack at {:?} rejected", pos);
        if game.phase() == Phase::ComputerTurn {
            game.computer_attack();
        }
    }
}
