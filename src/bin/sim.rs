use broadside::{
    init_logging, AiPlayer, BoardSize, Difficulty, Game, GameSettings, Phase, Player, Side,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Play one game with an automated pilot on the human side and print a JSON
/// summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10)]
    size: usize,
    #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,
    /// Targeting used for the human side.
    #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
    pilot: Difficulty,
    #[arg(long)]
    salvo: bool,
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let board_size = BoardSize::try_from(args.size)
        .map_err(|n| anyhow::anyhow!("unsupported board size {}", n))?;
    let settings = GameSettings::new(board_size, args.difficulty, args.salvo);

    let mut game = Game::with_seed(settings, args.seed);
    let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));
    let mut pilot = AiPlayer::new(args.pilot);
    game.auto_place_player_ships();

    let max_turns = board_size.cells() * board_size.cells();
    while game.phase() != Phase::GameOver {
        if game.turn() as usize > max_turns {
            return Err(anyhow::anyhow!("game did not finish within {} turns", max_turns));
        }
        match game.phase() {
            Phase::PlayerTurn if game.salvo_mode() => {
                for _ in 0..game.salvo_allowance(Side::Player) {
                    let queued = game.pending_salvo().to_vec();
                    let target = pilot
                        .select_target(&mut rng, game.computer_board())
                        .filter(|p| !queued.contains(p))
                        .or_else(|| {
                            game.computer_board()
                                .unresolved()
                                .find(|p| !queued.contains(p))
                        });
                    match target {
                        Some(pos) => {
                            game.player_attack(pos);
                        }
                        None => break,
                    }
                }
                game.fire_salvo();
            }
            Phase::PlayerTurn => {
                let target = pilot
                    .select_target(&mut rng, game.computer_board())
                    .ok_or_else(|| anyhow::anyhow!("no target left"))?;
                game.player_attack(target);
            }
            Phase::ComputerTurn => game.computer_attack(),
            other => return Err(anyhow::anyhow!("unexpected phase {:?}", other)),
        }
    }

    let winner = match game.winner() {
        broadside::Winner::Player => "player",
        broadside::Winner::Opponent => "opponent",
        broadside::Winner::None => "none",
    };
    let result = json!({
        "seed": args.seed,
        "board_size": board_size.cells(),
        "difficulty": args.difficulty.name(),
        "salvo": args.salvo,
        "winner": winner,
        "turns": game.turn(),
        "player_shots": game.player_shots(),
        "player_hits": game.player_hits(),
        "player_ships_lost": game.player_board().ships_sunk(),
        "computer_ships_lost": game.computer_board().ships_sunk(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
