//! Nickname history store.
//!
//! Records every nickname a player connects with and answers "which
//! nicknames has this player used", first-seen first. Players that were
//! around before the store existed are backfilled with their live
//! nickname on first query.

use crate::db::Database;
use crate::error::{PluginError, PluginResult};
use crate::host::Player;
use tracing::{debug, warn};

/// Separator used between nicknames in chat replies.
///
/// `$z` resets the formatting a nickname may leave open.
pub const DEFAULT_SEPARATOR: &str = "$z, ";

/// Store of per-player nickname history.
#[derive(Clone)]
pub struct NicknameHistory {
    db: Database,
}

impl NicknameHistory {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Ensure `(player_id, nickname)` is recorded.
    ///
    /// Returns `true` when this is the first time the pair is seen.
    pub async fn record_connect(&self, player_id: i64, nickname: &str) -> PluginResult<bool> {
        let inserted = self
            .db
            .nicknames()
            .record(player_id, nickname)
            .await
            .map_err(PluginError::StorageWrite)?;

        if inserted {
            debug!(player_id = %player_id, nickname = %nickname, "New nickname recorded");
        }
        Ok(inserted)
    }

    /// All nicknames the player has used, first-seen first.
    ///
    /// A player without any record gets their current nickname recorded
    /// and returned. A failed backfill write still returns the live nickname.
    pub async fn get_history(&self, player: &Player) -> PluginResult<Vec<String>> {
        let nicks = self
            .db
            .nicknames()
            .history(player.id)
            .await
            .map_err(PluginError::StorageRead)?;

        if !nicks.is_empty() {
            return Ok(nicks);
        }

        if let Err(e) = self.record_connect(player.id, &player.nickname).await {
            warn!(player_id = %player.id, error = %e, "Nickname backfill failed");
        }
        Ok(vec![player.nickname.clone()])
    }
}

/// Join nicknames for display in chat.
pub fn format_history(nicknames: &[String], separator: &str) -> String {
    nicknames.join(separator)
}
