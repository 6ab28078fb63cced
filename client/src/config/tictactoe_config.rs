use common::config::Validate;
use common::games::tictactoe::GameMode;
use serde::{Deserialize, Serialize};

pub const MAX_COMPUTER_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub computer_delay_ms: u64,
    pub default_mode: Option<GameMode>,
    #[serde(default = "default_show_cell_numbers")]
    pub show_cell_numbers: bool,
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {} (got {})",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 300,
            default_mode: None,
            show_cell_numbers: true,
        }
    }
}
