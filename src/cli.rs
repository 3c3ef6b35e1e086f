#![cfg(feature = "std")]

//! Line-based terminal front end.
//!
//! Reads commands from stdin and races them against the computer's thinking
//! timer. All engine calls happen on this one task.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::{
    achievements::Achievements,
    config::{BoardSize, Difficulty},
    game::Phase,
    session::{Session, TurnTicket},
    ship::Orientation,
    stats::Stats,
    storage::{ACHIEVEMENTS_FILE, STATS_FILE},
    timer::schedule_computer_turn,
    ui,
};

/// Where the persisted documents live.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub stats: PathBuf,
    pub achievements: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            stats: dir.join(STATS_FILE),
            achievements: dir.join(ACHIEVEMENTS_FILE),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
Commands:
  menu:       size <8|10|12>, difficulty <easy|normal|hard>, salvo, start
  placement:  <coord> [h|v] (e.g. `B3 v`), random
  battle:     <coord> to fire (salvo: to queue/unqueue), fire
  any time:   new, menu, help, quit";

fn handle_command(session: &mut Session, line: &str) -> Flow {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Flow::Continue;
    };
    let arg = parts.next();
    let phase = session.game().phase();

    match (cmd.to_ascii_lowercase().as_str(), phase) {
        ("quit" | "q", _) => return Flow::Quit,
        ("help" | "h", _) => println!("{}", HELP),
        ("new" | "r", _) => session.new_game(),
        ("menu", _) => session.return_to_menu(),
        ("size", Phase::MainMenu) => {
            match arg
                .and_then(|a| a.parse::<usize>().ok())
                .and_then(|n| BoardSize::try_from(n).ok())
            {
                Some(size) => {
                    session.set_board_size(size);
                }
                None => println!("Board size must be 8, 10 or 12"),
            }
        }
        ("difficulty", Phase::MainMenu) => {
            match arg.and_then(|a| Difficulty::from_str(a, true).ok()) {
                Some(d) => {
                    session.set_difficulty(d);
                }
                None => println!("Difficulty must be easy, normal or hard"),
            }
        }
        ("salvo", Phase::MainMenu) => {
            let salvo = !session.settings().salvo;
            session.set_salvo(salvo);
        }
        ("start" | "play", Phase::MainMenu) => {
            session.start_game();
        }
        ("random", Phase::Placement) => {
            session.game_mut().auto_place_player_ships();
        }
        ("fire" | "f", Phase::PlayerTurn) => {
            if !session.game_mut().fire_salvo() {
                println!("Nothing queued");
            }
        }
        (_, Phase::Placement) => {
            let orientation = match arg.map(|a| a.to_ascii_lowercase()) {
                Some(ref o) if o.starts_with('v') => Orientation::Vertical,
                _ => Orientation::Horizontal,
            };
            match ui::parse_coord(cmd) {
                Some(pos) if session.game_mut().place_player_ship(pos, orientation) => {}
                Some(_) => println!("Cannot place a ship there"),
                None => println!("Invalid coordinate"),
            }
        }
        (_, Phase::PlayerTurn) => match ui::parse_coord(cmd) {
            Some(pos) if session.game_mut().player_attack(pos) => {}
            Some(_) => println!("Invalid target"),
            None => println!("Invalid coordinate"),
        },
        (_, Phase::ComputerTurn) => println!("Wait for the enemy to fire"),
        _ => println!("Unknown command, try `help`"),
    }
    Flow::Continue
}

/// Count a finished game once, persist both documents and announce unlocks.
fn record_game_over(session: &Session, paths: &DataPaths) {
    let game = session.game();
    let mut stats = Stats::load_from(&paths.stats);
    if stats.record_outcome(game) {
        if let Err(e) = stats.save_to(&paths.stats) {
            log::warn!("{:#}", e);
        }
    }
    let mut achievements = Achievements::load_from(&paths.achievements);
    let unlocked = achievements.check_and_unlock(game);
    if !unlocked.is_empty() {
        if let Err(e) = achievements.save_to(&paths.achievements) {
            log::warn!("{:#}", e);
        }
        for a in unlocked {
            println!("Achievement unlocked: {} - {}", a.name, a.description);
        }
    }
    let d = game.difficulty();
    println!(
        "{} record: {} wins, {} losses ({:.0}%)",
        d.name(),
        stats.wins(d),
        stats.losses(d),
        stats.win_rate(d)
    );
}

fn redraw(session: &Session) {
    let game = session.game();
    if game.phase() != Phase::MainMenu {
        println!("\n{}", ui::render_game(game));
    }
    println!("{}", ui::prompt(game));
}

/// Run the interactive game until `quit` or end of input.
pub async fn run_interactive(
    mut session: Session,
    paths: DataPaths,
    thinking_delay: Duration,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<TurnTicket>();
    let mut lines = BufReader::new(stdin()).lines();
    let mut scheduled: Option<TurnTicket> = None;
    let mut recorded: Option<u64> = None;

    println!("{}", HELP);
    redraw(&session);
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if let Flow::Quit = handle_command(&mut session, line.trim()) {
                    break;
                }
            }
            Some(ticket) = rx.recv() => {
                session.resolve_computer_turn(ticket);
            }
        }

        if let Some(ticket) = session.computer_turn_ticket() {
            if scheduled != Some(ticket) {
                schedule_computer_turn(ticket, thinking_delay, tx.clone());
                scheduled = Some(ticket);
            }
        }
        if session.game().phase() == Phase::GameOver && recorded != Some(session.generation()) {
            record_game_over(&session, &paths);
            recorded = Some(session.generation());
        }
        redraw(&session);
    }
    Ok(())
}
