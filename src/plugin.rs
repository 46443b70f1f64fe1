//! Host plugin contract and the Admin++ plugin.
//!
//! The host creates the plugin through [`Plugin::load`], hands it every
//! player-connect callback and every chat command, and calls
//! [`Plugin::unload`] on shutdown. All dependencies arrive through `load`;
//! the plugin holds no global state.

use crate::commands::{self, COMMANDS, CommandContext, CommandSpec, PERMISSION_INFO};
use crate::config::Config;
use crate::db::Database;
use crate::error::PluginError;
use crate::history::NicknameHistory;
use crate::host::{Host, Player};
use crate::telemetry::spans;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{Instrument, error, info, warn};

/// Trait every plugin implements towards its host.
#[async_trait]
pub trait Plugin<H: Host + 'static>: Send + Sync {
    fn id() -> u32
    where
        Self: Sized;

    fn name() -> &'static str
    where
        Self: Sized;

    fn version() -> &'static str
    where
        Self: Sized;

    fn author() -> &'static str
    where
        Self: Sized;

    fn description() -> &'static str
    where
        Self: Sized;

    /// Called once before the first load, e.g. to seed host settings.
    fn prepare(_host: &H)
    where
        Self: Sized,
    {
    }

    /// Build the plugin. An error aborts the load.
    async fn load(host: Arc<H>, config: &Config) -> Result<Self, PluginError>
    where
        Self: Sized;

    /// Release resources. The plugin is not used afterwards.
    async fn unload(&self);

    /// Chat commands the host should route here.
    fn commands(&self) -> &[CommandSpec] {
        &[]
    }

    /// A player connected.
    async fn handle_player_connect(&self, _player: &Player) {}

    /// A chat command was issued. Returns `false` if the command is not ours.
    async fn handle_command(&self, _issuer: &Player, _text: &str) -> bool {
        false
    }
}

/// Admin++: nickname history and player info commands.
pub struct AdminPlusPlus<H: Host> {
    host: Arc<H>,
    history: NicknameHistory,
    separator: String,
}

impl<H: Host> AdminPlusPlus<H> {
    pub const ID: u32 = 85;
    pub const VERSION: &'static str = "1.0";

    pub fn history(&self) -> &NicknameHistory {
        &self.history
    }
}

#[async_trait]
impl<H: Host + 'static> Plugin<H> for AdminPlusPlus<H> {
    fn id() -> u32 {
        Self::ID
    }

    fn name() -> &'static str {
        "Admin++"
    }

    fn version() -> &'static str {
        Self::VERSION
    }

    fn author() -> &'static str {
        "mewin"
    }

    fn description() -> &'static str {
        "Advanced admin tools"
    }

    async fn load(host: Arc<H>, config: &Config) -> Result<Self, PluginError> {
        let db = Database::new(&config.database.path).await.map_err(|e| {
            error!(path = %config.database.path, error = %e, "Failed to open nickname database");
            PluginError::StorageUnavailable(e)
        })?;

        host.define_permission_level(PERMISSION_INFO, config.permissions.info_level);

        let name = <Self as Plugin<H>>::name();
        info!(
            plugin = %name,
            version = %Self::VERSION,
            info_level = %config.permissions.info_level,
            "Plugin loaded"
        );

        Ok(Self {
            host,
            history: NicknameHistory::new(db),
            separator: config.chat.separator.clone(),
        })
    }

    async fn unload(&self) {
        self.history.db().close().await;
        let name = <Self as Plugin<H>>::name();
        info!(plugin = %name, "Plugin unloaded");
    }

    fn commands(&self) -> &[CommandSpec] {
        &COMMANDS
    }

    async fn handle_player_connect(&self, player: &Player) {
        let span = spans::player_connect(player.id, &player.login);
        async {
            // Join processing must go on in the host regardless.
            if let Err(e) = self.history.record_connect(player.id, &player.nickname).await {
                warn!(
                    error = %e,
                    code = e.error_code(),
                    nickname = %player.nickname,
                    "Failed to record nickname"
                );
            }
        }
        .instrument(span)
        .await
    }

    async fn handle_command(&self, issuer: &Player, text: &str) -> bool {
        let ctx = CommandContext {
            history: &self.history,
            players: &*self.host,
            auth: &*self.host,
            separator: &self.separator,
        };

        match commands::dispatch(&ctx, issuer, text).await {
            Some(effects) => {
                commands::apply_effects(&*self.host, &*self.host, effects);
                true
            }
            None => false,
        }
    }
}
