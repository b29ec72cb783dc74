//! Configuration loading
//!
//! Reads `~/.config/searchbar/config.toml` (or an explicit path). A missing
//! file yields the defaults; an unreadable or invalid file is an error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, DisplayConfig, ServiceConfig, TimingConfig};

use crate::error::SearchBarError;

const CONFIG_DIR: &str = "searchbar";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, SearchBarError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return Ok(Config::default()),
        },
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, SearchBarError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(SearchBarError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    parse_config(&contents).map_err(|message| SearchBarError::Config {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
