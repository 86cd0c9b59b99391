//! Presence Tracker
//!
//! Per-user state machine: `Offline -> Online` when the first live session
//! registers, `Online -> Offline` only when the last one goes. A user's
//! state is a set of session ids, Online iff non-empty. It is never a bare
//! reference count, so an abrupt double-disconnect cannot undercount.
//!
//! `unregister` works from the session id alone via a reverse index; the
//! transport's disconnect signal is the only trigger. A half-open connection
//! can transiently over-report online status until the transport's own
//! timeout fires.
//!
//! State is sharded per user / per session (`DashMap`); transitions are
//! detected under the per-user entry guard so concurrent registrations of
//! the same user agree on which one crossed the Offline/Online boundary.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::HashSet;
use uuid::Uuid;

/// What a register/unregister did to the user's online state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceTransition {
    /// First session for this user: Offline -> Online.
    CameOnline,
    /// Last session for this user: Online -> Offline.
    WentOffline,
    /// Other sessions remain; the online set did not change.
    NoChange,
}

impl PresenceTransition {
    /// True when the online set changed and a snapshot must be broadcast.
    pub fn changed(&self) -> bool {
        !matches!(self, PresenceTransition::NoChange)
    }
}

/// Sharded presence state: user -> live session set, plus a reverse index so
/// disconnects need only the session id.
pub struct PresenceTracker {
    sessions_by_user: DashMap<Uuid, HashSet<Uuid>>,
    user_by_session: DashMap<Uuid, Uuid>,
}

impl PresenceTracker {
    pub fn new() -> Self {
        Self {
            sessions_by_user: DashMap::new(),
            user_by_session: DashMap::new(),
        }
    }

    /// Register a live session for a user.
    pub fn register(&self, user_id: Uuid, session_id: Uuid) -> PresenceTransition {
        self.user_by_session.insert(session_id, user_id);
        let mut sessions = self.sessions_by_user.entry(user_id).or_default();
        let was_offline = sessions.is_empty();
        sessions.insert(session_id);
        if was_offline {
            PresenceTransition::CameOnline
        } else {
            PresenceTransition::NoChange
        }
    }

    /// Unregister by session id alone. Idempotent: a second call for the
    /// same session reports `NoChange`, so double-disconnect cannot emit a
    /// second Offline transition.
    pub fn unregister(&self, session_id: Uuid) -> PresenceTransition {
        let Some((_, user_id)) = self.user_by_session.remove(&session_id) else {
            return PresenceTransition::NoChange;
        };

        match self.sessions_by_user.entry(user_id) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().remove(&session_id);
                if entry.get().is_empty() {
                    entry.remove();
                    PresenceTransition::WentOffline
                } else {
                    PresenceTransition::NoChange
                }
            }
            Entry::Vacant(_) => PresenceTransition::NoChange,
        }
    }

    pub fn is_online(&self, user_id: Uuid) -> bool {
        self.sessions_by_user
            .get(&user_id)
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    /// Current online set, sorted for a stable wire shape.
    pub fn online_user_ids(&self) -> Vec<Uuid> {
        let mut online: Vec<Uuid> = self
            .sessions_by_user
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| *entry.key())
            .collect();
        online.sort();
        online
    }

    pub fn online_count(&self) -> usize {
        self.sessions_by_user
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .count()
    }
}

impl Default for PresenceTracker {
    fn default() -> Self {
        Self::new()
    }
}
