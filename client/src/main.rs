mod config;
mod input;
mod render;
mod runner;

use std::path::PathBuf;
use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{FirstPlayerMode, GameEngine, StarterPicker};
use tictactoe_common::{log, logger};

use config::get_config_manager;
use runner::SessionRunner;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Random,
    X,
    O,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Random => FirstPlayerMode::Random,
            FirstPlayerArg::X => FirstPlayerMode::X,
            FirstPlayerArg::O => FirstPlayerMode::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe in the terminal")]
struct Args {
    /// Path to the YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the starting-player coin flips
    #[arg(long)]
    seed: Option<u64>,

    /// Who opens the first round
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config).get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.display.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        config.display.log_prefix.clone()
    };
    logger::init_logger(prefix);

    let mut rng = match args.seed.or(config.session.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let first_player_mode = args
        .first_player
        .map(FirstPlayerMode::from)
        .unwrap_or(config.session.first_player);
    let starting_player = match first_player_mode.fixed_player() {
        Some(player) => player,
        None => rng.pick_starter(),
    };

    log!("Session started (seed {}), {} opens round 1", rng.seed(), starting_player);

    let engine = GameEngine::with_starting_player(rng, starting_player);
    let mut runner = SessionRunner::new(engine, config.display.show_coordinates);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    runner.run(stdin.lock(), &mut stdout)?;

    log!("Session ended after {} rounds", runner.engine().scores().rounds_played());
    Ok(())
}
