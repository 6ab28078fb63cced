mod command;
mod config;
mod console_runner;
mod render;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{GameMode, TicTacToeGameState};
use common::{log, logger};
use tokio::io::BufReader;

use config::get_config_manager;
use console_runner::ConsoleRunner;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Player,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Player => GameMode::VsPlayer,
            ModeArg::Computer => GameMode::VsComputer,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", version, about = "Tic-tac-toe in the terminal, against a friend or an unbeatable computer")]
struct Args {
    /// YAML config file (defaults to one next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the menu and start in this mode
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Append log lines to this file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config).load()?;

    let prefix = if args.use_log_prefix {
        config.log_prefix.clone().or_else(|| Some("Client".to_string()))
    } else {
        None
    };
    match &args.log_file {
        Some(path) => logger::init_file_logger(prefix, path)?,
        None => logger::init_logger(prefix),
    }

    let mut state = TicTacToeGameState::new();
    if let Some(mode) = args.mode.map(GameMode::from).or(config.tictactoe.default_mode) {
        state.start(mode);
    }

    let mut runner = ConsoleRunner::new(state, config.tictactoe.clone(), std::io::stdout());
    let input = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = runner.run(input) => result?,
        _ = tokio::signal::ctrl_c() => {
            log!("Interrupted, shutting down");
        }
    }

    log!("Client exited");
    Ok(())
}
