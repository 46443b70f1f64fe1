//! Chat command handlers.
//!
//! Handlers never talk to the host directly. They return [`ChatEffect`]s
//! which the caller applies through [`apply_effects`], so they can be
//! tested without a host.

pub mod nicks;
pub mod pinfo;

#[cfg(test)]
pub(crate) mod testing;

use crate::error::{PluginError, PluginResult};
use crate::history::NicknameHistory;
use crate::host::{Authentication, Chat, Player, PlayerRegistry};
use crate::telemetry::spans;
use tracing::{Instrument, debug, warn};

/// Permission guarding both commands.
pub const PERMISSION_INFO: &str = "View extended player information";

/// A reply the host must deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    Information { login: String, text: String },
    Error { login: String, text: String },
    Usage { login: String, text: String },
    /// The host's standard permission-denied response.
    NotAllowed { player: Player },
}

/// Effects of a successful command.
pub type CommandResult = Vec<ChatEffect>;

/// Registration data for a chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub admin_only: bool,
}

/// Commands this plugin answers.
pub const COMMANDS: [CommandSpec; 2] = [
    CommandSpec {
        name: "pinfo",
        description: "Information about a player",
        admin_only: true,
    },
    CommandSpec {
        name: "nicks",
        description: "View a players known nicknames",
        admin_only: true,
    },
];

/// What a command handler may use.
pub struct CommandContext<'a> {
    pub history: &'a NicknameHistory,
    pub players: &'a dyn PlayerRegistry,
    pub auth: &'a dyn Authentication,
    pub separator: &'a str,
}

/// Split raw chat text into command name and target argument.
///
/// `"//nicks bob"` yields `("nicks", Some("bob"))`.
pub fn parse_invocation(text: &str) -> Option<(String, Option<&str>)> {
    let mut parts = text.split_whitespace();
    let name = parts.next()?.trim_start_matches('/').to_lowercase();
    if name.is_empty() {
        return None;
    }
    Some((name, parts.next()))
}

/// Route a chat command to its handler.
///
/// Returns `None` when the command is not one of ours.
pub async fn dispatch(
    ctx: &CommandContext<'_>,
    issuer: &Player,
    text: &str,
) -> Option<CommandResult> {
    let (name, target) = parse_invocation(text)?;
    if !COMMANDS.iter().any(|c| c.name == name) {
        return None;
    }

    let span = spans::command(&name, &issuer.login, target);
    let result = async {
        if !ctx.auth.check_permission(issuer, PERMISSION_INFO) {
            return Err(PluginError::PermissionDenied);
        }
        match name.as_str() {
            "pinfo" => pinfo::handle_pinfo(ctx, issuer, target).await,
            _ => nicks::handle_nicks(ctx, issuer, target).await,
        }
    }
    .instrument(span.clone())
    .await;

    let effects = match result {
        Ok(effects) => effects,
        Err(e) => {
            let _enter = span.enter();
            if e.is_fault() {
                warn!(error = %e, code = e.error_code(), "Command failed");
            } else {
                debug!(error = %e, code = e.error_code(), "Command rejected");
            }
            vec![error_reply(issuer, e)]
        }
    };
    Some(effects)
}

/// The chat reply for a failed command.
pub fn error_reply(issuer: &Player, err: PluginError) -> ChatEffect {
    match err {
        PluginError::PermissionDenied => ChatEffect::NotAllowed {
            player: issuer.clone(),
        },
        PluginError::PlayerNotFound(login) => ChatEffect::Error {
            login: issuer.login.clone(),
            text: format!("Player '{}' not found!", login),
        },
        PluginError::StorageUnavailable(_)
        | PluginError::StorageWrite(_)
        | PluginError::StorageRead(_) => ChatEffect::Error {
            login: issuer.login.clone(),
            text: "Unable to retrieve nickname history.".to_string(),
        },
    }
}

/// Deliver effects through the host.
pub fn apply_effects(chat: &dyn Chat, auth: &dyn Authentication, effects: CommandResult) {
    for effect in effects {
        match effect {
            ChatEffect::Information { login, text } => chat.send_information(&text, &login),
            ChatEffect::Error { login, text } => chat.send_error(&text, &login),
            ChatEffect::Usage { login, text } => chat.send_usage_info(&text, &login),
            ChatEffect::NotAllowed { player } => auth.send_not_allowed(&player),
        }
    }
}

/// Resolve a command target, or fail with [`PluginError::PlayerNotFound`].
pub(crate) fn find_player(ctx: &CommandContext<'_>, login: &str) -> PluginResult<Player> {
    ctx.players
        .player(login)
        .ok_or_else(|| PluginError::PlayerNotFound(login.to_string()))
}
