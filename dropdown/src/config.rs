//! Dropdown configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Narrowest dropdown that still fits a border, padding, one label cell and
/// the open/closed indicator.
pub const MIN_WIDTH: u16 = 6;

const DEFAULT_OPTIONS: [&str; 10] = [
    "All", "Location", "Size", "Type", "Date", "All", "Location", "Size", "Type", "Date",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width must be at least {min} cells, got {0}", min = MIN_WIDTH)]
    WidthTooSmall(u16),
    #[error("max_visible_rows must be at least 1")]
    NoVisibleRows,
}

/// User-facing settings for a dropdown. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Option labels in navigation order. Duplicates are allowed.
    pub options: Vec<String>,
    /// Shown in the collapsed control while nothing is selected.
    pub placeholder: String,
    /// Total width in cells, border included.
    pub width: u16,
    /// Rows of the open list visible before it scrolls.
    pub max_visible_rows: u16,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            options: DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
            placeholder: "Select an option".to_string(),
            width: 24,
            max_visible_rows: 6,
        }
    }
}

impl DropdownConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall(self.width));
        }
        if self.max_visible_rows == 0 {
            return Err(ConfigError::NoVisibleRows);
        }
        Ok(())
    }
}
