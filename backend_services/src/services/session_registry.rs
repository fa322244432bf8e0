use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use copilot_core::SessionState;
use tokio::{
    sync::{Mutex, RwLock},
    time::interval,
};
use tracing::{debug, info};
use uuid::Uuid;

/// A session is locked for the whole of a turn, so turns never interleave
pub type SharedSession = Arc<Mutex<SessionState>>;

struct Slot {
    session: SharedSession,
    last_seen: Instant,
}

impl Slot {
    fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::new())),
            last_seen: Instant::now(),
        }
    }
}

/// In-memory sessions keyed by id. Nothing survives a restart, and sessions
/// nobody has touched for a while are dropped by [`SessionRegistry::start_sweeper`].
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Slot>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty session and return its id
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        sessions.insert(id, Slot::new());
        info!(session_id = %id, active = sessions.len(), "Session started");
        id
    }

    /// Look up a session and mark it as in use
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        let mut sessions = self.sessions.write().await;
        let slot = sessions.get_mut(&id)?;
        slot.last_seen = Instant::now();
        Some(slot.session.clone())
    }

    /// Drop a session; returns false if it did not exist
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(&id).is_some();
        if removed {
            info!(session_id = %id, active = sessions.len(), "Session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop every session last used more than `max_idle` before `now`.
    /// Returns how many were dropped.
    pub async fn evict_idle(&self, now: Instant, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, slot| {
            let keep = now.saturating_duration_since(slot.last_seen) <= max_idle;
            if !keep {
                debug!(session_id = %id, "Session expired");
            }
            keep
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, active = sessions.len(), "Expired idle sessions");
        }
        evicted
    }

    /// Periodically expire idle sessions in the background
    pub fn start_sweeper(&self, max_idle: Duration, every: Duration) {
        let registry = self.clone();
        tokio::spawn(async move {
            let mut ticker = interval(every);
            info!(max_idle_secs = max_idle.as_secs(), "Session sweeper started");

            loop {
                ticker.tick().await;
                registry.evict_idle(Instant::now(), max_idle).await;
            }
        });
    }
}
