pub(crate) use crate::config::auth::AuthConfig;
pub(crate) use crate::config::database::DatabaseConfig;
use config::{Config as ConfigCrate, ConfigError};
use serde::Deserialize;

pub mod auth;
pub mod database;

/// Main configuration structure for the drinks server
#[derive(Debug, Deserialize, Clone)]
pub struct DrinksConfig {
    /// The port the server will listen to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Token verification configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Backing store configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

fn default_port() -> u16 {
    8000
}

impl Default for DrinksConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            auth: AuthConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl DrinksConfig {
    /// Creates a new config instance from environment variables
    pub fn new() -> Result<Self, String> {
        ConfigCrate::builder()
            .add_source(
                config::Environment::with_prefix("DRINKS")
                    .prefix_separator("_")
                    .separator("_")
                    .convert_case(config::Case::Snake),
            )
            .build()
            .map_err(|e: ConfigError| e.to_string())?
            .try_deserialize()
            .map_err(|e| e.to_string())
    }
}
