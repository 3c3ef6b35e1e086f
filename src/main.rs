use std::path::PathBuf;

use broadside::{
    cli::{run_interactive, DataPaths},
    init_logging, storage, Achievements, BoardSize, Difficulty, GameSettings, Session, Stats,
    THINKING_DELAY,
};
use clap::{Parser, Subcommand};
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Naval combat against a computer opponent", long_about = None)]
struct Cli {
    /// Directory holding the stats and achievements files (defaults to $HOME).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, default_value_t = 10, value_parser = parse_board_size)]
        size: usize,
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long)]
        salvo: bool,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        /// Computer thinking pause in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Show win/loss statistics.
    Stats,
    /// List achievements.
    Achievements,
}

fn parse_board_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{}", e))?;
    BoardSize::try_from(n)
        .map(|_| n)
        .map_err(|n| format!("unsupported board size {} (use 8, 10 or 12)", n))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(storage::default_data_dir);
    let paths = DataPaths::in_dir(&data_dir);

    match cli.command.unwrap_or(Commands::Play {
        size: 10,
        difficulty: Difficulty::Easy,
        salvo: false,
        seed: None,
        delay_ms: None,
    }) {
        Commands::Play {
            size,
            difficulty,
            salvo,
            seed,
            delay_ms,
        } => {
            let board_size = BoardSize::try_from(size).unwrap_or_default();
            let settings = GameSettings::new(board_size, difficulty, salvo);
            let session = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (game will be reproducible)", s);
                    Session::new(settings, s)
                }
                None => Session::from_entropy(settings),
            };
            let delay = delay_ms.map(Duration::from_millis).unwrap_or(THINKING_DELAY);
            run_interactive(session, paths, delay).await?;
        }
        Commands::Stats => {
            let stats = Stats::load_from(&paths.stats);
            println!("{:<8} {:>5} {:>7} {:>6}", "", "wins", "losses", "rate");
            for d in Difficulty::ALL {
                println!(
                    "{:<8} {:>5} {:>7} {:>5.0}%",
                    d.name(),
                    stats.wins(d),
                    stats.losses(d),
                    stats.win_rate(d)
                );
            }
        }
        Commands::Achievements => {
            let achievements = Achievements::load_from(&paths.achievements);
            for a in achievements.all() {
                println!(
                    "[{}] {:<20} {}",
                    if a.unlocked { "x" } else { " " },
                    a.name,
                    a.description
                );
            }
        }
    }
    Ok(())
}
