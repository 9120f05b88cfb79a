//! Configuration loading
//!
//! Reads `~/.config/omnibox/config.toml`. Loading never fails: a missing
//! file means defaults, and a malformed one means defaults plus a warning
//! the UI shows once.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_AUGMENTATION_URL, HistoryConfig, RemoteConfig, SuggestionsConfig,
};

const CONFIG_DIR: &str = "omnibox";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigResult {
            config: Config::default(),
            warning: None,
        },
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read config: {}", e)),
            }
        }
    }
}

pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config, using defaults: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config, using defaults: {}", e.message())),
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
