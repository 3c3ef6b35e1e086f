use broadside::{
    schedule_computer_turn, BoardSize, Difficulty, GameSettings, Orientation, Phase, Position,
    Session,
};
use tokio::sync::mpsc;
use tokio::time::Duration;

fn menu_session(seed: u64) -> Session {
    Session::new(GameSettings::new(BoardSize::Small, Difficulty::Normal, false), seed)
}

/// Start a game, place the fleet and fire one shot so the computer is up.
fn session_awaiting_computer(seed: u64) -> Session {
    let mut session = menu_session(seed);
    assert!(session.start_game());
    let game = session.game_mut();
    for row in 0..5 {
        assert!(game.place_player_ship(Position::new(row, 0), Orientation::Horizontal));
    }
    let target = game.computer_board().unresolved().next().unwrap();
    assert!(game.player_attack(target));
    assert_eq!(game.phase(), Phase::ComputerTurn);
    session
}

#[test]
fn test_settings_only_change_in_menu() {
    let mut session = menu_session(1);
    assert_eq!(session.game().phase(), Phase::MainMenu);
    assert!(session.set_board_size(BoardSize::Large));
    assert!(session.set_difficulty(Difficulty::Hard));
    assert!(session.set_salvo(true));

    assert!(session.start_game());
    let game = session.game();
    assert_eq!(game.phase(), Phase::Placement);
    assert_eq!(game.board_size(), BoardSize::Large);
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert!(game.salvo_mode());

    assert!(!session.set_board_size(BoardSize::Small));
    assert!(!session.set_difficulty(Difficulty::Easy));
    assert!(!session.set_salvo(false));
    assert!(!session.start_game());
    assert_eq!(session.settings().board_size, BoardSize::Large);

    session.return_to_menu();
    assert_eq!(session.game().phase(), Phase::MainMenu);
    assert!(session.set_board_size(BoardSize::Small));
}

#[test]
fn test_generation_bumps_on_every_new_game() {
    let mut session = menu_session(2);
    assert_eq!(session.generation(), 0);
    session.start_game();
    session.new_game();
    session.return_to_menu();
    assert_eq!(session.generation(), 3);
}

#[test]
fn test_ticket_only_during_computer_turn() {
    let mut session = menu_session(3);
    assert!(session.computer_turn_ticket().is_none());
    session.start_game();
    assert!(session.computer_turn_ticket().is_none());

    let mut session = session_awaiting_computer(3);
    let ticket = session.computer_turn_ticket().unwrap();
    assert!(session.resolve_computer_turn(ticket));
    assert_eq!(session.game().phase(), Phase::PlayerTurn);
    // the same ticket cannot fire twice
    assert!(!session.resolve_computer_turn(ticket));
}

#[test]
fn test_ticket_from_earlier_turn_is_rejected() {
    let mut session = session_awaiting_computer(4);
    let first = session.computer_turn_ticket().unwrap();
    assert!(session.resolve_computer_turn(first));

    let target = session.game().computer_board().unresolved().next().unwrap();
    assert!(session.game_mut().player_attack(target));
    assert_eq!(session.game().phase(), Phase::ComputerTurn);

    assert!(!session.resolve_computer_turn(first));
    assert_eq!(session.game().phase(), Phase::ComputerTurn);
    let second = session.computer_turn_ticket().unwrap();
    assert_ne!(first, second);
    assert!(session.resolve_computer_turn(second));
}

#[tokio::test]
async fn test_timer_delivers_ticket() {
    let mut session = session_awaiting_computer(5);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticket = session.computer_turn_ticket().unwrap();
    schedule_computer_turn(ticket, Duration::from_millis(10), tx);

    let delivered = rx.recv().await.unwrap();
    assert_eq!(delivered, ticket);
    assert!(session.resolve_computer_turn(delivered));
    assert_eq!(session.game().phase(), Phase::PlayerTurn);
    assert_eq!(session.game().last_computer_targets().len(), 1);
}

#[tokio::test]
async fn test_timer_from_abandoned_game_is_discarded() {
    let mut session = session_awaiting_computer(6);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let stale = session.computer_turn_ticket().unwrap();
    let handle = schedule_computer_turn(stale, Duration::from_millis(20), tx);

    session.new_game();
    assert_eq!(session.game().phase(), Phase::Placement);
    let fresh_board = session.game().player_board().clone();

    let delivered = rx.recv().await.unwrap();
    handle.await.unwrap();
    assert!(!session.resolve_computer_turn(delivered));
    assert_eq!(session.game().phase(), Phase::Placement);
    assert_eq!(session.game().player_board(), &fresh_board);
}
