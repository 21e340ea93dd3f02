//! Configuration management for `NutriBuddy`.

/// Database configuration and connection management
pub mod database;

/// Seed food catalog loading from config.toml
pub mod foods;

/// Daily goals and streak policy from config.toml
pub mod goals;

use crate::errors::Result;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Daily goals and streak policy
    #[serde(default)]
    pub goals: goals::GoalsConfig,
    /// Seed foods for the catalog
    #[serde(default)]
    pub foods: Vec<foods::FoodConfig>,
}

/// Loads the application configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents =
        std::fs::read_to_string(path.as_ref()).map_err(|e| crate::errors::Error::Config {
            message: format!("Failed to read config file: {e}"),
        })?;

    toml::from_str(&contents).map_err(|e| crate::errors::Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the application configuration from the default location (./config.toml).
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}
