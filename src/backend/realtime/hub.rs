//! Realtime Hub
//!
//! The hub ties the session registry, channel rooms, and presence tracker
//! into the connection lifecycle the transport drives:
//!
//! - `connect` registers a session and hands back its event queue
//! - `join_room` / `leave_room` manage delivery subscriptions
//! - `deliver` fans a message out to one channel's room
//! - `disconnect` unwinds everything, clean teardown or not
//!
//! Presence snapshots are broadcast under a dedicated lock, and the snapshot
//! is computed while holding it, so back-to-back transitions can never leave
//! a stale snapshot as the last event a session observes.
//!
//! The hub knows nothing about sockets or authorization: the transport layer
//! authorizes a room join before calling `join_room`, and tests drive the
//! whole lifecycle by draining session queues directly.

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::backend::realtime::presence::PresenceTracker;
use crate::backend::realtime::rooms::RoomRegistry;
use crate::backend::realtime::session::SessionRegistry;
use crate::shared::ServerEvent;

pub struct RealtimeHub {
    sessions: SessionRegistry,
    rooms: RoomRegistry,
    presence: PresenceTracker,
    /// Serializes snapshot computation + broadcast across transitions.
    presence_broadcast: Mutex<()>,
}

impl RealtimeHub {
    pub fn new() -> Self {
        Self {
            sessions: SessionRegistry::new(),
            rooms: RoomRegistry::new(),
            presence: PresenceTracker::new(),
            presence_broadcast: Mutex::new(()),
        }
    }

    /// Register a connected session. Returns the session id and the queue
    /// the transport's writer task drains.
    ///
    /// The new session always receives the current presence snapshot; when
    /// the user just came online, every session receives it.
    pub async fn connect(
        &self,
        user_id: Uuid,
        username: String,
    ) -> (Uuid, UnboundedReceiver<ServerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session_id = self.sessions.register(user_id, username.clone(), tx);
        let transition = self.presence.register(user_id, session_id);

        {
            let _guard = self.presence_broadcast.lock().await;
            let snapshot = ServerEvent::PresenceSnapshot {
                online: self.presence.online_user_ids(),
            };
            if transition.changed() {
                self.sessions.broadcast_all(&snapshot);
            } else {
                self.sessions.send_to(session_id, snapshot);
            }
        }

        tracing::info!(
            "Session {} connected for user {} ({}), {} sessions live",
            session_id,
            username,
            user_id,
            self.sessions.count()
        );
        (session_id, rx)
    }

    /// Tear a session down: registry removal first (so no further event can
    /// target it), then room unwind, then the presence transition. Called on
    /// every socket close, clean or not; a repeat call is a no-op.
    pub async fn disconnect(&self, session_id: Uuid) {
        let Some(handle) = self.sessions.remove(session_id) else {
            return;
        };

        for channel_id in &handle.joined {
            self.rooms.leave(*channel_id, session_id);
        }

        let transition = self.presence.unregister(session_id);
        if transition.changed() {
            let _guard = self.presence_broadcast.lock().await;
            let snapshot = ServerEvent::PresenceSnapshot {
                online: self.presence.online_user_ids(),
            };
            self.sessions.broadcast_all(&snapshot);
        }

        tracing::info!(
            "Session {} disconnected (user {}), {} sessions live",
            session_id,
            handle.user_id,
            self.sessions.count()
        );
    }

    /// Subscribe a session to a channel's live feed. Idempotent. Returns
    /// false for an unknown session.
    ///
    /// The caller authorizes first: the socket layer runs the channel Read
    /// check before ever calling this.
    pub fn join_room(&self, session_id: Uuid, channel_id: Uuid) -> bool {
        let Some(sender) = self.sessions.note_joined(session_id, channel_id) else {
            return false;
        };
        self.rooms.join(channel_id, session_id, sender);
        true
    }

    pub fn leave_room(&self, session_id: Uuid, channel_id: Uuid) {
        self.sessions.note_left(session_id, channel_id);
        self.rooms.leave(channel_id, session_id);
    }

    /// Fan an event out to one channel's room. Non-blocking queue pushes;
    /// the ingest pipeline calls this under the channel's append guard so
    /// delivery order equals append order.
    pub fn deliver(&self, channel_id: Uuid, event: &ServerEvent) -> usize {
        self.rooms.deliver(channel_id, event)
    }

    /// Push an event to one session (error frames and the like).
    pub fn send_to(&self, session_id: Uuid, event: ServerEvent) -> bool {
        self.sessions.send_to(session_id, event)
    }

    pub fn online_user_ids(&self) -> Vec<Uuid> {
        self.presence.online_user_ids()
    }

    pub fn is_online(&self, user_id: Uuid) -> bool {
        self.presence.is_online(user_id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.count()
    }

    pub fn room_occupancy(&self, channel_id: Uuid) -> usize {
        self.rooms.occupancy(channel_id)
    }

    pub fn is_in_room(&self, channel_id: Uuid, session_id: Uuid) -> bool {
        self.rooms.contains(channel_id, session_id)
    }

    /// Drop empty room entries. Run from the periodic cleanup task.
    pub fn prune_empty_rooms(&self) -> usize {
        self.rooms.prune_empty()
    }
}

impl Default for RealtimeHub {
    fn default() -> Self {
        Self::new()
    }
}
