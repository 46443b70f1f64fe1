//! Unified error handling for the plugin.
//!
//! Storage failures carry the underlying [`DbError`]; user-input failures
//! (unknown player, missing permission) are answered in chat and never
//! logged as faults.

use crate::db::DbError;
use thiserror::Error;

/// Errors raised by plugin operations.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Database could not be opened or migrated at load time.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(DbError),

    #[error("storage write failed: {0}")]
    StorageWrite(DbError),

    #[error("storage read failed: {0}")]
    StorageRead(DbError),

    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("permission denied")]
    PermissionDenied,
}

impl PluginError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::StorageUnavailable(_) => "storage_unavailable",
            Self::StorageWrite(_) => "storage_write_failed",
            Self::StorageRead(_) => "storage_read_failed",
            Self::PlayerNotFound(_) => "player_not_found",
            Self::PermissionDenied => "permission_denied",
        }
    }

    /// Whether the error is a system fault rather than bad user input.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable(_) | Self::StorageWrite(_) | Self::StorageRead(_)
        )
    }
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
