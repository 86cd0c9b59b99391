//! Live Session Registry
//!
//! One entry per connected socket. A session is a registry record indexed by
//! a generated session id, decoupled from the transport object: it carries
//! the owning user, the outbound event queue, and the set of rooms joined.
//! Tests drive connect/join/disconnect against the registry directly, no
//! socket required.
//!
//! The outbound queue is an unbounded sender whose receiving half is drained
//! by a single writer task per socket; queue order is wire order, which is
//! what makes room delivery FIFO per session.

use dashmap::DashMap;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::shared::ServerEvent;

/// A connected session: identity plus the outbound queue.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub user_id: Uuid,
    pub username: String,
    pub sender: UnboundedSender<ServerEvent>,
    /// Channels this session has joined, for leave-all on disconnect.
    pub joined: HashSet<Uuid>,
}

/// Sharded map of live sessions.
pub struct SessionRegistry {
    sessions: DashMap<Uuid, SessionHandle>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a connected session and hand back its generated id.
    pub fn register(
        &self,
        user_id: Uuid,
        username: String,
        sender: UnboundedSender<ServerEvent>,
    ) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions.insert(
            session_id,
            SessionHandle {
                user_id,
                username,
                sender,
                joined: HashSet::new(),
            },
        );
        session_id
    }

    /// Remove a session, returning its handle so the caller can unwind room
    /// subscriptions. Safe to call twice; the second call gets `None`.
    pub fn remove(&self, session_id: Uuid) -> Option<SessionHandle> {
        self.sessions.remove(&session_id).map(|(_, handle)| handle)
    }

    pub fn get(&self, session_id: Uuid) -> Option<SessionHandle> {
        self.sessions.get(&session_id).map(|h| h.clone())
    }

    /// Record that a session joined a channel. Returns the session's queue
    /// sender for the room registry, or `None` for an unknown session.
    pub fn note_joined(
        &self,
        session_id: Uuid,
        channel_id: Uuid,
    ) -> Option<UnboundedSender<ServerEvent>> {
        let mut handle = self.sessions.get_mut(&session_id)?;
        handle.joined.insert(channel_id);
        Some(handle.sender.clone())
    }

    pub fn note_left(&self, session_id: Uuid, channel_id: Uuid) {
        if let Some(mut handle) = self.sessions.get_mut(&session_id) {
            handle.joined.remove(&channel_id);
        }
    }

    /// Push an event to one session. A send failure means the drain task is
    /// gone; the disconnect path will clean the entry up.
    pub fn send_to(&self, session_id: Uuid, event: ServerEvent) -> bool {
        match self.sessions.get(&session_id) {
            Some(handle) => handle.sender.send(event).is_ok(),
            None => false,
        }
    }

    /// Push an event to every connected session, whatever rooms they are in.
    pub fn broadcast_all(&self, event: &ServerEvent) -> usize {
        let mut delivered = 0;
        for entry in self.sessions.iter() {
            if entry.sender.send(event.clone()).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
