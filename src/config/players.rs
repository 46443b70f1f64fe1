//! Player seeds for the console host.

use serde::Deserialize;

use crate::host::{AuthLevel, Player};

/// A player the console host knows about at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSeed {
    pub id: i64,
    pub login: String,
    /// Defaults to the login.
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub level: AuthLevel,
}

impl PlayerSeed {
    pub fn nickname(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.login)
    }

    pub fn to_player(&self) -> Player {
        Player::new(self.id, self.login.clone(), self.nickname())
    }
}
