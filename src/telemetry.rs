//! Logging setup and span helpers.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this twice
/// is harmless; the second subscriber is discarded.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for a command execution.
    pub fn command(name: &str, issuer: &str, target: Option<&str>) -> Span {
        if let Some(target) = target {
            info_span!("command", name = %name, issuer = %issuer, target = %target)
        } else {
            info_span!("command", name = %name, issuer = %issuer)
        }
    }

    /// Create a span for a player-connect callback.
    pub fn player_connect(player_id: i64, login: &str) -> Span {
        info_span!("player_connect", player_id = %player_id, login = %login)
    }
}
