//! In-memory, per-session list of tracked applications.
//!
//! Nothing is written to disk: a restart, like closing the browser session,
//! forgets every list.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::tracker::models::{ApplicationUpdate, TrackedApplication};

/// Sessions are never evicted; a list lives until emptied or the process restarts.
#[derive(Clone, Default)]
pub struct TrackerStore {
    sessions: Arc<RwLock<HashMap<Uuid, Vec<TrackedApplication>>>>,
}

impl TrackerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, session_id: Uuid, application: TrackedApplication) {
        self.sessions
            .write()
            .await
            .entry(session_id)
            .or_default()
            .push(application);
    }

    /// Snapshot in insertion order.
    pub async fn list(&self, session_id: Uuid) -> Vec<TrackedApplication> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Applies `update` and returns the edited entry, or `None` if the id is unknown.
    pub async fn update(
        &self,
        session_id: Uuid,
        id: Uuid,
        update: ApplicationUpdate,
    ) -> Option<TrackedApplication> {
        let mut sessions = self.sessions.write().await;
        let application = sessions
            .get_mut(&session_id)?
            .iter_mut()
            .find(|a| a.id == id)?;

        if let Some(name) = update.name {
            application.name = name;
        }
        if let Some(job_title) = update.job_title {
            application.job_title = job_title;
        }
        if let Some(stage) = update.stage {
            application.stage = stage;
        }

        Some(application.clone())
    }

    /// Returns `true` if an entry was removed.
    pub async fn delete(&self, session_id: Uuid, id: Uuid) -> bool {
        let mut sessions = self.sessions.write().await;
        let Some(list) = sessions.get_mut(&session_id) else {
            return false;
        };

        let before = list.len();
        list.retain(|a| a.id != id);
        let removed = list.len() != before;

        if list.is_empty() {
            sessions.remove(&session_id);
        }
        removed
    }
}
