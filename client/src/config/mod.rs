mod config;
mod display_config;
mod session_config;

pub(crate) use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use config::{get_config_manager, Config};
pub use display_config::DisplayConfig;
pub use session_config::SessionConfig;
