//! Admin++ - nickname history plugin for game-server administration hosts.
//!
//! Records every nickname a player connects with and answers the
//! `pinfo` and `nicks` admin chat commands. The host framework is reached
//! only through the traits in [`host`].

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod host;
pub mod plugin;
pub mod telemetry;

pub use config::Config;
pub use db::Database;
pub use error::{PluginError, PluginResult};
pub use history::{DEFAULT_SEPARATOR, NicknameHistory, format_history};
pub use host::{AuthLevel, Host, Player};
pub use plugin::{AdminPlusPlus, Plugin};
