use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, Game, GameConfig, GameStatus, Player,
    DEFAULT_BOARD_SIZE, DEFAULT_PLACEMENT_ATTEMPTS,
};

/// Console sea battle against the computer.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Fix the RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Cap on random placement tries per fleet.
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS)]
    placement_attempts: u32,

    /// Watch the computer play against itself.
    #[arg(long)]
    auto: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let config = GameConfig {
        size: cli.size,
        max_placement_attempts: cli.placement_attempts,
        ..GameConfig::default()
    };

    ui::greet(config.size);

    let user: Box<dyn Player> = if cli.auto {
        Box::new(AiPlayer::new())
    } else {
        Box::new(CliPlayer::new())
    };
    let mut game = Game::new(&mut rng, config, user, Box::new(AiPlayer::new()))?;

    loop {
        ui::print_boards(game.user_board(), game.ai_board());
        ui::announce_turn(game.current_actor());
        let report = game.step(&mut rng)?;
        ui::announce_shot(&report);
        if report.status != GameStatus::InProgress {
            break;
        }
    }

    ui::print_boards(game.user_board(), game.ai_board());
    ui::announce_winner(game.status());
    Ok(())
}
