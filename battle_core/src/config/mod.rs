//! Configuration loading from TOML and JSON files

pub mod constants;
mod mounts;

pub use constants::{
    AffinityConstants, BlendConstants, CombatConstants, CriticalConstants, DamageConstants,
    DodgeConstants,
};
pub use mounts::{load_mount_catalog, parse_mount_catalog, CatalogError, MountCatalog};

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
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
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

/// Load combat constants from a TOML file and validate them
pub fn load_constants(path: &Path) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Parse combat constants from a TOML string and validate them
pub fn parse_constants(content: &str) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}
