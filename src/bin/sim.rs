use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, Game, GameConfig, GameStatus, HuntTarget, BOARD_SIZE, SHIP_COUNT, SHIP_LENGTH};
use serde_json::json;

/// Play one AI-vs-AI game and print the outcome as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BOARD_SIZE)]
    board_size: usize,
    #[arg(long, default_value_t = SHIP_COUNT)]
    ship_count: usize,
    #[arg(long, default_value_t = SHIP_LENGTH)]
    ship_length: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = GameConfig::new(cli.board_size, cli.ship_count, cli.ship_length);
    let mut game = Game::new(config, HuntTarget::new(), HuntTarget::new())?;
    game.setup(&mut rng)?;
    let status = game.run(&mut rng)?;

    let winner = match status {
        GameStatus::FirstWon => Some("first"),
        GameStatus::SecondWon => Some("second"),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "seed": cli.seed,
        "config": game.config(),
        "turns": game.turns(),
        "winner": winner,
        "first": game.first().board().stats(),
        "second": game.second().board().stats(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
