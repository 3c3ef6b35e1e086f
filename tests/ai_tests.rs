use std::collections::HashSet;

use broadside::{
    easy_target, hard_target, normal_target, select_target, Board, BoardSize, Difficulty,
    Orientation, Position, Ship, ShipKind, FLEET,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn board_with(kind: ShipKind, origin: Position, orientation: Orientation) -> Board {
    let mut board = Board::new(BoardSize::Standard);
    assert!(board.place_ship(Ship::new(kind), origin, orientation));
    board
}

#[test]
fn hard_extends_horizontal_pair_to_the_right() {
    let mut board = board_with(ShipKind::Carrier, Position::new(3, 2), Orientation::Horizontal);
    board.attack(Position::new(3, 3));
    board.attack(Position::new(3, 4));
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        assert_eq!(hard_target(&board, &mut rng), Some(Position::new(3, 5)));
    }
}

#[test]
fn hard_extends_left_when_right_is_resolved() {
    let mut board = board_with(ShipKind::Carrier, Position::new(3, 2), Orientation::Horizontal);
    board.attack(Position::new(3, 3));
    board.attack(Position::new(3, 4));
    board.attack(Position::new(3, 5));
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(hard_target(&board, &mut rng), Some(Position::new(3, 2)));
}

#[test]
fn hard_extends_vertical_pair_downwards() {
    let mut board = board_with(ShipKind::Battleship, Position::new(1, 7), Orientation::Vertical);
    board.attack(Position::new(2, 7));
    board.attack(Position::new(3, 7));
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(hard_target(&board, &mut rng), Some(Position::new(4, 7)));
}

#[test]
fn hard_hunts_neighbours_in_fixed_order() {
    let mut board = board_with(ShipKind::Cruiser, Position::new(5, 5), Orientation::Horizontal);
    board.attack(Position::new(5, 6));
    let mut rng = SmallRng::seed_from_u64(9);
    // up first
    assert_eq!(hard_target(&board, &mut rng), Some(Position::new(4, 6)));
    board.attack(Position::new(4, 6));
    assert_eq!(hard_target(&board, &mut rng), Some(Position::new(6, 6)));
}

#[test]
fn hard_uses_parity_without_hits() {
    let mut board = Board::new(BoardSize::Small);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(hard_target(&board, &mut rng), Some(Position::new(0, 0)));
    board.attack(Position::new(0, 0));
    assert_eq!(hard_target(&board, &mut rng), Some(Position::new(0, 2)));

    // exhaust the even cells; odd ones remain for the random fallback
    let even: Vec<_> = board.positions().filter(|p| (p.row + p.col) % 2 == 0).collect();
    for pos in even {
        board.attack(pos);
    }
    let pos = hard_target(&board, &mut rng).unwrap();
    assert_eq!((pos.row + pos.col) % 2, 1);
}

#[test]
fn normal_follows_up_a_hit_in_random_order() {
    let mut board = board_with(ShipKind::Destroyer, Position::new(0, 0), Orientation::Horizontal);
    board.attack(Position::new(0, 0));
    let mut seen = HashSet::new();
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let pos = normal_target(&board, &mut rng).unwrap();
        assert!(
            pos == Position::new(1, 0) || pos == Position::new(0, 1),
            "unexpected target {:?}",
            pos
        );
        seen.insert(pos);
    }
    assert_eq!(seen.len(), 2, "neighbour order should vary between calls");
}

#[test]
fn normal_falls_back_to_random_when_hits_are_boxed_in() {
    let mut board = board_with(ShipKind::Destroyer, Position::new(0, 0), Orientation::Horizontal);
    for pos in [(0, 0), (0, 1), (1, 0), (1, 1), (0, 2)] {
        board.attack(Position::from(pos));
    }
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..20 {
        let pos = normal_target(&board, &mut rng).unwrap();
        assert!(!board.cell(pos).is_resolved());
    }
}

#[test]
fn easy_only_picks_unresolved_cells() {
    let mut board = Board::with_size(3);
    for pos in board.positions().collect::<Vec<_>>() {
        if pos != Position::new(2, 1) {
            board.attack(pos);
        }
    }
    let mut rng = SmallRng::seed_from_u64(2);
    assert_eq!(easy_target(&board, &mut rng), Some(Position::new(2, 1)));
}

fn played_board(seed: u64, shots: usize) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(BoardSize::Standard);
    for kind in FLEET {
        board.place_randomly(kind, &mut rng);
    }
    for _ in 0..shots {
        let pos = Position::new(rng.random_range(0..10), rng.random_range(0..10));
        board.attack(pos);
    }
    (board, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn targets_are_never_resolved(seed in any::<u64>(), shots in 0..99usize, tier in 0..3usize) {
        let (board, mut rng) = played_board(seed, shots);
        let difficulty = Difficulty::ALL[tier];
        let pos = select_target(difficulty, &board, &mut rng).unwrap();
        prop_assert!(board.is_valid_position(pos));
        prop_assert!(!board.cell(pos).is_resolved());
    }
}
