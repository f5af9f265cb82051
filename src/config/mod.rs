// Configuration module for Fixpong
// Handles loading and managing game configuration from TOML file

pub mod loader;
pub mod types;

pub use loader::load_config;
pub use types::{AIConfig, Config, DisplayConfig, KeyBindings};
