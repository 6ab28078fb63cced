use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::TicTacToeConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
const CONFIG_HEADER: &str = "Tic-tac-toe client settings\ncomputer_delay_ms: pause before the computer answers (0-5000)";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::new(
        FileContentConfigProvider::new(path_override.unwrap_or_else(get_default_config_path)),
        YamlConfigSerializer::with_header(CONFIG_HEADER),
    )
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tictactoe: TicTacToeConfig::default(),
            log_prefix: Some("Client".to_string()),
        }
    }
}
