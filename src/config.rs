//! Configuration loading
//!
//! Reads `~/.config/advisor/config.toml`. A missing file means defaults; a
//! file that does not parse also means defaults, plus a warning the widget
//! shows at startup.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{AdviceConfig, Config, DEFAULT_HISTORY_COUNT, HistoryConfig};

use crate::error::AdvisorError;

const CONFIG_DIR: &str = "advisor";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus any problem worth telling the user about
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

/// Load the config from `path`, treating a missing file as defaults
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == ErrorKind::NotFound => ConfigResult::default(),
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read config, using defaults: {}", e)),
            }
        }
    }
}

/// Load a config file the user named explicitly
///
/// Unlike the default location, the file has to exist.
pub fn load_explicit_config(path: &Path) -> Result<ConfigResult, AdvisorError> {
    let contents = fs::read_to_string(path).map_err(|source| AdvisorError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_config(&contents))
}

pub fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Invalid config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!(
                    "Invalid config, using defaults: {}",
                    e.message()
                )),
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
