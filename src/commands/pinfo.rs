//! PINFO command handler.
//!
//! Validates the target like `nicks` does. What extended information to
//! show has not been settled, so a found target only produces a log line.

use super::{ChatEffect, CommandContext, CommandResult, find_player};
use crate::error::PluginResult;
use crate::host::Player;
use tracing::debug;

/// Handle `pinfo <login>`.
pub async fn handle_pinfo(
    ctx: &CommandContext<'_>,
    issuer: &Player,
    target: Option<&str>,
) -> PluginResult<CommandResult> {
    let Some(login) = target else {
        return Ok(vec![ChatEffect::Usage {
            login: issuer.login.clone(),
            text: "Usage example: '//pinfo login'".to_string(),
        }]);
    };

    let player = find_player(ctx, login)?;

    debug!(login = %login, player_id = %player.id, "Player info requested");
    Ok(Vec::new())
}
