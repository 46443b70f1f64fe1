//! adminppd - console host for the Admin++ plugin.
//!
//! Drives the plugin from stdin the way a game-server host would:
//!
//! ```text
//! join <login> [nickname...]   player connects (optionally with a new nickname)
//! <login> <chat text>          player issues a chat command, e.g. `alice //nicks bob`
//! quit                         unload and exit
//! ```

use adminpp::host::{Authentication, Chat, PlayerRegistry};
use adminpp::{AdminPlusPlus, AuthLevel, Config, Player, Plugin};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

type AdminPlugin = AdminPlusPlus<ConsoleHost>;

/// In-memory host: seeded player registry, stdout chat.
struct ConsoleHost {
    players: DashMap<String, (Player, AuthLevel)>,
    permissions: DashMap<String, AuthLevel>,
    next_id: AtomicI64,
}

impl ConsoleHost {
    fn new(config: &Config) -> Self {
        let players = DashMap::new();
        let mut max_id = 0;
        for seed in &config.players {
            max_id = max_id.max(seed.id);
            players.insert(seed.login.clone(), (seed.to_player(), seed.level));
        }

        Self {
            players,
            permissions: DashMap::new(),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    /// Register or update a connected player.
    fn connect(&self, login: &str, nickname: Option<String>) -> Player {
        let mut entry = self.players.entry(login.to_string()).or_insert_with(|| {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            (Player::new(id, login, login), AuthLevel::Player)
        });
        if let Some(nickname) = nickname {
            entry.0.nickname = nickname;
        }
        entry.0.clone()
    }
}

impl PlayerRegistry for ConsoleHost {
    fn player(&self, login: &str) -> Option<Player> {
        self.players.get(login).map(|e| e.0.clone())
    }
}

impl Authentication for ConsoleHost {
    fn define_permission_level(&self, permission: &str, level: AuthLevel) {
        self.permissions.insert(permission.to_string(), level);
    }

    fn check_permission(&self, player: &Player, permission: &str) -> bool {
        let Some(required) = self.permissions.get(permission).map(|r| *r) else {
            return false;
        };
        self.players
            .get(&player.login)
            .is_some_and(|e| e.1 >= required)
    }

    fn send_not_allowed(&self, player: &Player) {
        println!(
            "[denied -> {}] You do not have the required rights to perform this command!",
            player.login
        );
    }
}

impl Chat for ConsoleHost {
    fn send_information(&self, text: &str, login: &str) {
        println!("[info -> {}] {}", login, text);
    }

    fn send_error(&self, text: &str, login: &str) {
        println!("[error -> {}] {}", login, text);
    }

    fn send_usage_info(&self, text: &str, login: &str) {
        println!("[usage -> {}] {}", login, text);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "adminpp.toml".to_string());

    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    adminpp::telemetry::init(&config.logging);
    info!(path = %config_path, players = config.players.len(), "Starting adminppd");

    let host = Arc::new(ConsoleHost::new(&config));
    <AdminPlugin as Plugin<ConsoleHost>>::prepare(&host);
    let plugin = <AdminPlugin as Plugin<ConsoleHost>>::load(Arc::clone(&host), &config)
        .await
        .map_err(|e| {
            error!(error = %e, code = e.error_code(), "Plugin load aborted");
            e
        })?;

    for command in plugin.commands() {
        info!(
            command = command.name,
            description = command.description,
            admin_only = command.admin_only,
            "Command registered"
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
        if head == "join" {
            let mut parts = rest.trim().splitn(2, ' ');
            let Some(login) = parts.next().filter(|l| !l.is_empty()) else {
                warn!("Usage: join <login> [nickname]");
                continue;
            };
            let nickname = parts.next().map(|n| n.trim().to_string());
            let player = host.connect(login, nickname);
            plugin.handle_player_connect(&player).await;
            continue;
        }

        let Some(issuer) = host.player(head) else {
            warn!(login = %head, "Unknown issuer, join first");
            continue;
        };
        if !plugin.handle_command(&issuer, rest).await {
            warn!(text = %rest, "Command not handled");
        }
    }

    plugin.unload().await;
    Ok(())
}
