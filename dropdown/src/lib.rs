//! A dropdown select control with keyboard navigation, hover tracking and
//! outside-click dismissal, rendered as a `termdom` element tree.

mod config;
mod events;
mod render;
mod selection;
mod state;

pub use config::{ConfigError, DropdownConfig, MIN_WIDTH};
pub use selection::Selection;
pub use state::Dropdown;
