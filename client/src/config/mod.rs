mod config;
mod play_mode;

pub use config::{ClientConfig, get_config_manager};
pub use play_mode::PlayMode;
