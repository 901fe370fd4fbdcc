//! Per-client session isolation.
//!
//! Each session id maps to its own [`Session`] behind an async mutex, so
//! commands from one client never touch another client's tree, and commands
//! within one session run one at a time.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::commands::{create_default_registry, CommandRegistry, CommandResult};
use crate::config::ShellConfig;

use super::controller::Session;

/// Id used by the binary when none is given.
pub const DEFAULT_SESSION: &str = "default";

pub struct SessionManager {
    config: Arc<ShellConfig>,
    registry: Arc<CommandRegistry>,
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionManager {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(create_default_registry()),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// The session for `id`, created on first use.
    pub async fn open(&self, id: &str) -> Arc<Mutex<Session>> {
        if let Some(session) = self.sessions.read().await.get(id) {
            return Arc::clone(session);
        }

        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(id.to_string()).or_insert_with(|| {
            debug!(session = %id, "session opened");
            Arc::new(Mutex::new(Session::with_registry(
                Arc::clone(&self.config),
                Arc::clone(&self.registry),
            )))
        });
        Arc::clone(session)
    }

    pub async fn run(&self, id: &str, line: &str) -> CommandResult {
        let session = self.open(id).await;
        let mut session = session.lock().await;
        session.run(line)
    }

    pub async fn execute(&self, id: &str, line: &str) -> String {
        self.run(id, line).await.into_text()
    }

    /// The session for `id` if it is already open.
    async fn existing(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Path of the session's current directory. An id with no session yet
    /// reports the root without opening one.
    pub async fn current_path(&self, id: &str) -> String {
        match self.existing(id).await {
            Some(session) => session.lock().await.current_path(),
            None => self.config.root_name.clone(),
        }
    }

    pub async fn prompt(&self, id: &str) -> String {
        match self.existing(id).await {
            Some(session) => session.lock().await.prompt(),
            None => format!("{}{}", self.config.root_name, self.config.prompt_suffix),
        }
    }

    /// Discard a session and everything in it. Returns whether it existed.
    pub async fn close(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            debug!(session = %id, "session closed");
        }
        removed
    }

    /// Open session ids, sorted.
    pub async fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
