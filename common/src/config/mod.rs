mod config_manager;
mod game_config;

pub use config_manager::{
    ConfigContentProvider, ConfigError, ConfigManager, FileContentConfigProvider,
    MemoryContentProvider,
};
pub use game_config::{GameConfig, WindowConfig};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
