//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::players::PlayerSeed;
use crate::history::DEFAULT_SEPARATOR;
use crate::host::AuthLevel;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Plugin configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Permission levels required by the commands.
    #[serde(default)]
    pub permissions: PermissionsConfig,
    /// Chat reply formatting.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Players known to the console host.
    #[serde(default)]
    pub players: Vec<PlayerSeed>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file, or `:memory:`.
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "adminpp.db".to_string()
}

/// Permission configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionsConfig {
    /// Minimum level allowed to use `pinfo` and `nicks`.
    #[serde(default = "default_info_level")]
    pub info_level: AuthLevel,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            info_level: default_info_level(),
        }
    }
}

fn default_info_level() -> AuthLevel {
    AuthLevel::Moderator
}

/// Chat formatting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Text placed between nicknames in `nicks` replies.
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
