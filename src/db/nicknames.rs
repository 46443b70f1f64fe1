//! Nickname repository.
//!
//! Append-only storage of every literal nickname a player has connected
//! with. Uniqueness of `(player_id, nickname)` is enforced by the schema.

use super::DbError;
use sqlx::SqlitePool;

/// A stored nickname sighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameRecord {
    pub sequence: i64,
    pub player_id: i64,
    pub nickname: String,
    pub first_seen_at: i64,
}

/// Repository for nickname operations.
pub struct NicknameRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> NicknameRepository<'a> {
    /// Create a new nickname repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a nickname for a player unless the pair already exists.
    ///
    /// Returns `true` if a new row was inserted.
    pub async fn record(&self, player_id: i64, nickname: &str) -> Result<bool, DbError> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO nicknames (player_id, nickname, first_seen_at)
            VALUES (?, ?, ?)
            ON CONFLICT (player_id, nickname) DO NOTHING
            "#,
        )
        .bind(player_id)
        .bind(nickname)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get all nicknames of a player, first-seen first.
    pub async fn history(&self, player_id: i64) -> Result<Vec<String>, DbError> {
        let rows = sqlx::query_scalar::<_, String>(
            r#"
            SELECT nickname FROM nicknames
            WHERE player_id = ?
            ORDER BY sequence
            "#,
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get the full rows of a player, first-seen first.
    pub async fn records(&self, player_id: i64) -> Result<Vec<NicknameRecord>, DbError> {
        let rows = sqlx::query_as::<_, (i64, i64, String, i64)>(
            r#"
            SELECT sequence, player_id, nickname, first_seen_at
            FROM nicknames
            WHERE player_id = ?
            ORDER BY sequence
            "#,
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(sequence, player_id, nickname, first_seen_at)| NicknameRecord {
                sequence,
                player_id,
                nickname,
                first_seen_at,
            })
            .collect())
    }

    /// Count the nicknames stored for a player.
    pub async fn count(&self, player_id: i64) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM nicknames WHERE player_id = ?")
            .bind(player_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
