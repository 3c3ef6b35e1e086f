use broadside::{Board, BoardSize, Orientation, Position, Ship, ShipKind, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn test_fleet_lengths() {
    let lengths: Vec<_> = FLEET.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    assert_eq!(ShipKind::Submarine.name(), "Submarine");
}

#[test]
fn test_new_ship_is_unplaced() {
    let ship = Ship::new(ShipKind::Battleship);
    assert!(!ship.is_placed());
    assert_eq!(ship.length(), 4);
    assert_eq!(ship.hits().len(), 4);
    assert!(!ship.is_sunk());
}

#[test]
fn test_register_hit_and_sunk() {
    let mut board = Board::new(BoardSize::Small);
    board.place_ship(Ship::new(ShipKind::Destroyer), Position::new(1, 1), Orientation::Vertical);
    let mut ship = board.ships()[0].clone();

    assert!(ship.contains(Position::new(2, 1)));
    assert!(!ship.contains(Position::new(1, 2)));
    assert!(!ship.register_hit(Position::new(0, 0)));
    assert!(ship.register_hit(Position::new(1, 1)));
    assert!(!ship.is_sunk());
    assert_eq!(ship.damage(), 1);
    assert!(ship.register_hit(Position::new(2, 1)));
    assert!(ship.is_sunk());
}

#[test]
fn test_orientation_toggle() {
    assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
    assert_eq!(Orientation::Vertical.toggled(), Orientation::Horizontal);
}
