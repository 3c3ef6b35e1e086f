mod common;

use std::fs;
use std::path::PathBuf;

use broadside::{
    AchievementId, Achievements, BoardSize, Difficulty, Game, GameSettings, Phase, Stats,
};
use common::{place_fleet_in_rows, play_to_victory};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("broadside-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn won_small_game() -> Game {
    let mut game = Game::with_seed(GameSettings::new(BoardSize::Small, Difficulty::Easy, false), 21);
    place_fleet_in_rows(&mut game);
    play_to_victory(&mut game);
    assert_eq!(game.phase(), Phase::GameOver);
    game
}

#[test]
fn test_stats_round_trip() {
    let dir = scratch_dir("stats");
    let path = dir.join("stats.json");
    let mut stats = Stats::default();
    stats.record_win(Difficulty::Normal);
    stats.record_loss(Difficulty::Hard);
    stats.save_to(&path).unwrap();

    let loaded = Stats::load_from(&path);
    assert_eq!(loaded, stats);
    assert_eq!(loaded.wins(Difficulty::Normal), 1);
    assert_eq!(loaded.losses(Difficulty::Hard), 1);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_missing_or_corrupt_documents_load_as_default() {
    let dir = scratch_dir("corrupt");
    assert_eq!(Stats::load_from(&dir.join("absent.json")), Stats::default());

    let bad = dir.join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert_eq!(Stats::load_from(&bad), Stats::default());
    assert_eq!(Achievements::load_from(&bad), Achievements::default());

    // unknown and missing fields are tolerated
    let partial = dir.join("partial.json");
    fs::write(&partial, r#"{"hard_wins": 3, "extra": true}"#).unwrap();
    assert_eq!(Stats::load_from(&partial).wins(Difficulty::Hard), 3);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_record_outcome_counts_finished_games_only() {
    let mut stats = Stats::default();
    let fresh = Game::with_seed(GameSettings::default(), 1);
    assert!(!stats.record_outcome(&fresh));

    let game = won_small_game();
    assert!(stats.record_outcome(&game));
    assert_eq!(stats.wins(Difficulty::Easy), 1);
    assert_eq!(stats.total_games(Difficulty::Easy), 1);
    assert_eq!(stats.win_rate(Difficulty::Easy), 100.0);
}

#[test]
fn test_achievements_for_a_clean_small_board_win() {
    let game = won_small_game();
    let mut achievements = Achievements::default();
    let unlocked: Vec<AchievementId> = achievements
        .check_and_unlock(&game)
        .into_iter()
        .map(|a| a.id)
        .collect();

    for id in [
        AchievementId::FirstBlood,
        AchievementId::Sharpshooter,
        AchievementId::Efficient,
        AchievementId::LuckyShot,
        AchievementId::SmallBoardWin,
    ] {
        assert!(unlocked.contains(&id), "{:?} not unlocked", id);
        assert!(achievements.is_unlocked(id));
    }
    for id in [
        AchievementId::HardcoreVictor,
        AchievementId::SalvoMaster,
        AchievementId::LargeBoardWin,
    ] {
        assert!(!unlocked.contains(&id), "{:?} unlocked", id);
    }

    // nothing is announced twice
    assert!(achievements.check_and_unlock(&game).is_empty());
}

#[test]
fn test_unfinished_game_unlocks_nothing() {
    let game = Game::with_seed(GameSettings::default(), 3);
    let mut achievements = Achievements::default();
    assert!(achievements.check_and_unlock(&game).is_empty());
    assert!(achievements.all().iter().all(|a| !a.unlocked));
    assert_eq!(achievements.all().len(), AchievementId::ALL.len());
}

#[test]
fn test_achievements_round_trip() {
    let dir = scratch_dir("achievements");
    let path = dir.join("achievements.json");
    let mut achievements = Achievements::default();
    achievements.check_and_unlock(&won_small_game());
    achievements.save_to(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"first_blood\": true"));
    assert_eq!(Achievements::load_from(&path), achievements);
    fs::remove_dir_all(dir).unwrap();
}
