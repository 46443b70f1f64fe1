//! Recording host double.

use adminpp::host::{Authentication, Chat, PlayerRegistry};
use adminpp::{AuthLevel, Player};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Something the plugin asked the host to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Sent {
    Information { login: String, text: String },
    Error { login: String, text: String },
    Usage { login: String, text: String },
    NotAllowed { login: String },
}

/// Host that records every outbound call.
#[derive(Default)]
pub struct TestHost {
    players: Mutex<HashMap<String, (Player, AuthLevel)>>,
    permissions: Mutex<HashMap<String, AuthLevel>>,
    sent: Mutex<Vec<Sent>>,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a connected player.
    pub fn add_player(&self, player: &Player, level: AuthLevel) {
        self.players
            .lock()
            .unwrap()
            .insert(player.login.clone(), (player.clone(), level));
    }

    /// Everything sent so far, draining the log.
    pub fn take_sent(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn required_level(&self, permission: &str) -> Option<AuthLevel> {
        self.permissions.lock().unwrap().get(permission).copied()
    }
}

impl PlayerRegistry for TestHost {
    fn player(&self, login: &str) -> Option<Player> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.players
            .lock()
            .unwrap()
            .get(login)
            .map(|(p, _)| p.clone())
    }
}

impl Authentication for TestHost {
    fn define_permission_level(&self, permission: &str, level: AuthLevel) {
        self.permissions
            .lock()
            .unwrap()
            .insert(permission.to_string(), level);
    }

    fn check_permission(&self, player: &Player, permission: &str) -> bool {
        let Some(required) = self.required_level(permission) else {
            return false;
        };
        self.players
            .lock()
            .unwrap()
            .get(&player.login)
            .is_some_and(|(_, level)| *level >= required)
    }

    fn send_not_allowed(&self, player: &Player) {
        self.sent.lock().unwrap().push(Sent::NotAllowed {
            login: player.login.clone(),
        });
    }
}

impl Chat for TestHost {
    fn send_information(&self, text: &str, login: &str) {
        self.sent.lock().unwrap().push(Sent::Information {
            login: login.to_string(),
            text: text.to_string(),
        });
    }

    fn send_error(&self, text: &str, login: &str) {
        self.sent.lock().unwrap().push(Sent::Error {
            login: login.to_string(),
            text: text.to_string(),
        });
    }

    fn send_usage_info(&self, text: &str, login: &str) {
        self.sent.lock().unwrap().push(Sent::Usage {
            login: login.to_string(),
            text: text.to_string(),
        });
    }
}
