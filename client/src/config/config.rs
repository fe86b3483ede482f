use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::tictactoe::{Difficulty, Player};

use super::PlayMode;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub mode: PlayMode,
    /// Side the human takes against the bot. `first` plays X.
    pub human_side: Player,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub use_log_prefix: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::VsBot,
            human_side: Player::First,
            difficulty: Difficulty::Hard,
            seed: None,
            use_log_prefix: false,
            verbose: false,
        }
    }
}
