mod config;
mod tictactoe_config;

pub use config::get_config_manager;
pub use tictactoe_config::TicTacToeConfig;
