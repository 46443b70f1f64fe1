//! Shared test utilities for command handler tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{CommandContext, PERMISSION_INFO};
use crate::db::Database;
use crate::history::{DEFAULT_SEPARATOR, NicknameHistory};
use crate::host::{AuthLevel, Authentication, Player, PlayerRegistry};

/// Registry + auth double that counts lookups.
pub struct TestHost {
    players: HashMap<String, (Player, AuthLevel)>,
    required: Mutex<HashMap<String, AuthLevel>>,
    lookups: AtomicUsize,
}

impl TestHost {
    pub fn new() -> Self {
        let host = Self {
            players: HashMap::new(),
            required: Mutex::new(HashMap::new()),
            lookups: AtomicUsize::new(0),
        };
        host.define_permission_level(PERMISSION_INFO, AuthLevel::Moderator);
        host
    }

    pub fn with_player(mut self, player: Player, level: AuthLevel) -> Self {
        self.players.insert(player.login.clone(), (player, level));
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl PlayerRegistry for TestHost {
    fn player(&self, login: &str) -> Option<Player> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.players.get(login).map(|(p, _)| p.clone())
    }
}

impl Authentication for TestHost {
    fn define_permission_level(&self, permission: &str, level: AuthLevel) {
        self.required
            .lock()
            .unwrap()
            .insert(permission.to_string(), level);
    }

    fn check_permission(&self, player: &Player, permission: &str) -> bool {
        let Some(required) = self.required.lock().unwrap().get(permission).copied() else {
            return false;
        };
        self.players
            .get(&player.login)
            .is_some_and(|(_, level)| *level >= required)
    }

    fn send_not_allowed(&self, _player: &Player) {}
}

/// A moderator issuing commands.
pub fn moderator() -> Player {
    Player::new(1, "mod", "$0f0Mod")
}

/// Fresh in-memory history store.
pub async fn history() -> NicknameHistory {
    NicknameHistory::new(Database::new(":memory:").await.unwrap())
}

pub fn context<'a>(history: &'a NicknameHistory, host: &'a TestHost) -> CommandContext<'a> {
    CommandContext {
        history,
        players: host,
        auth: host,
        separator: DEFAULT_SEPARATOR,
    }
}
