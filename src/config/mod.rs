//! Configuration loading and management.
//!
//! - [`types`]: config struct definitions (Config, DatabaseConfig, PermissionsConfig,
//!   ChatConfig, LoggingConfig) and TOML loading
//! - [`players`]: player seeds for the console host

mod players;
mod types;

pub use players::PlayerSeed;
pub use types::{ChatConfig, Config, ConfigError, DatabaseConfig, LoggingConfig, PermissionsConfig};
