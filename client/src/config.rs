use std::path::PathBuf;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, GameConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, GameConfig>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}
