use super::model::{SessionState, UserSession};
use crate::entry::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// Owns every user's transient session.
///
/// `SessionManager` is responsible for:
/// - Creating a session the first time a user writes
/// - Serializing messages of the same user
/// - Dropping sessions of users who went idle
///
/// Sessions live only in memory; a restart forgets every pending flow.
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<UserId, Arc<Mutex<UserSession>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the session of `user_id`, creating it if needed.
    ///
    /// The guard is held while one message is handled. A second message of
    /// the same user waits for it; other users are not affected.
    pub async fn acquire(&self, user_id: UserId) -> OwnedMutexGuard<UserSession> {
        let existing = {
            let sessions = self.sessions.read().await;
            sessions.get(&user_id).cloned()
        };

        let slot = match existing {
            Some(slot) => slot,
            None => {
                let mut sessions = self.sessions.write().await;
                sessions.entry(user_id).or_default().clone()
            }
        };

        slot.lock_owned().await
    }

    /// Returns a snapshot of the state of `user_id`.
    ///
    /// Waits if a message of that user is being handled.
    pub async fn state_of(&self, user_id: UserId) -> SessionState {
        let slot = {
            let sessions = self.sessions.read().await;
            sessions.get(&user_id).cloned()
        };

        match slot {
            Some(slot) => slot.lock().await.state.clone(),
            None => SessionState::Idle,
        }
    }

    /// Removes idle sessions that no message is currently using.
    ///
    /// # Returns
    ///
    /// The number of removed sessions.
    pub async fn prune_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            match slot.try_lock() {
                Ok(session) => !session.state.is_idle(),
                Err(_) => true,
            }
        });
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = sessions.len(), "Pruned idle sessions");
        }
        removed
    }

    /// Number of sessions currently held in memory.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
