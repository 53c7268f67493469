//! Loading the dropdown configuration from disk.

use std::fs;
use std::path::{Path, PathBuf};

use dropdown::DropdownConfig;

use crate::error::AppError;
use crate::paths;

/// Load the configuration from `explicit`, else from the default config
/// file if it exists, else fall back to defaults.
pub fn load(explicit: Option<PathBuf>) -> Result<DropdownConfig, AppError> {
    let path = match explicit {
        Some(path) => path,
        None => match paths::config_file() {
            Some(path) if path.exists() => path,
            _ => {
                log::info!("no config file, using defaults");
                return Ok(DropdownConfig::default());
            }
        },
    };
    load_file(&path)
}

pub fn load_file(path: &Path) -> Result<DropdownConfig, AppError> {
    log::info!("loading config from {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DropdownConfig =
        serde_json::from_str(&text).map_err(|source| AppError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;

    Ok(config)
}
