//! Configuration loading from TOML files

mod buffs;
mod dots;
mod players;
mod tables;

pub use buffs::{default_buff_presets, load_buff_presets, parse_buff_presets};
pub use dots::{default_dot_registry, load_dot_configs, parse_dot_configs};
pub use players::{default_example_players, load_example_players, parse_example_players, ExamplePlayers};
pub use tables::{default_stat_tables, load_stat_tables, parse_stat_tables};

use crate::error::CalcError;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}
