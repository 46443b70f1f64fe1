//! Services the host framework provides to plugins.
//!
//! The host owns player sessions, permission levels and chat delivery.
//! Plugins only see these traits, so any host (or a test double) can
//! drive them.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A connected player as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Host-assigned identity, stable across reconnects of the same account.
    pub id: i64,
    pub login: String,
    /// Display name currently in use.
    pub nickname: String,
}

impl Player {
    pub fn new(id: i64, login: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            id,
            login: login.into(),
            nickname: nickname.into(),
        }
    }
}

/// Permission ladder of the host's authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthLevel {
    #[default]
    Player,
    Moderator,
    Admin,
    #[serde(alias = "super_admin")]
    SuperAdmin,
    #[serde(alias = "master_admin")]
    MasterAdmin,
}

impl AuthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
            Self::MasterAdmin => "masteradmin",
        }
    }
}

impl fmt::Display for AuthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "player" => Ok(Self::Player),
            "moderator" | "mod" => Ok(Self::Moderator),
            "admin" => Ok(Self::Admin),
            "superadmin" | "super_admin" => Ok(Self::SuperAdmin),
            "masteradmin" | "master_admin" => Ok(Self::MasterAdmin),
            other => Err(format!("unknown auth level: {}", other)),
        }
    }
}

/// Lookup of connected players.
pub trait PlayerRegistry: Send + Sync {
    /// Find a player by login.
    fn player(&self, login: &str) -> Option<Player>;
}

/// The host's permission system.
pub trait Authentication: Send + Sync {
    /// Declare a named permission and the minimum level that holds it.
    fn define_permission_level(&self, permission: &str, level: AuthLevel);

    /// Whether `player` holds `permission`.
    fn check_permission(&self, player: &Player, permission: &str) -> bool;

    /// Send the host's standard "not allowed" response.
    fn send_not_allowed(&self, player: &Player);
}

/// Chat delivery to a single login.
pub trait Chat: Send + Sync {
    fn send_information(&self, text: &str, login: &str);
    fn send_error(&self, text: &str, login: &str);
    fn send_usage_info(&self, text: &str, login: &str);
}

/// Everything a plugin needs from its host.
pub trait Host: PlayerRegistry + Authentication + Chat {}

impl<T: PlayerRegistry + Authentication + Chat> Host for T {}
