//! Channel Room Registry
//!
//! channelId -> the sessions currently "in" that room, each represented by a
//! clone of its outbound queue sender. A session can sit in any number of
//! rooms. Rooms are sharded per channel (`DashMap`), so delivery on one
//! channel never blocks another.
//!
//! `deliver` pushes to every subscriber while holding that one channel's
//! entry guard; the pushes are non-blocking queue sends, and the caller
//! (ingest pipeline) invokes `deliver` under the channel's append lock, which
//! is what pins delivery order to append order.
//!
//! No acknowledgement, no redelivery: a session absent at delivery time
//! catches up through message history on its next join.

use dashmap::DashMap;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::shared::ServerEvent;

/// Sharded channel -> subscriber map.
pub struct RoomRegistry {
    rooms: DashMap<Uuid, HashMap<Uuid, UnboundedSender<ServerEvent>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }

    /// Add a session to a channel's room. Idempotent: re-joining replaces
    /// the stored sender with an identical clone.
    pub fn join(&self, channel_id: Uuid, session_id: Uuid, sender: UnboundedSender<ServerEvent>) {
        self.rooms
            .entry(channel_id)
            .or_default()
            .insert(session_id, sender);
    }

    /// Remove a session from a channel's room. Unknown pairs are a no-op.
    pub fn leave(&self, channel_id: Uuid, session_id: Uuid) {
        if let Some(mut room) = self.rooms.get_mut(&channel_id) {
            room.remove(&session_id);
        }
    }

    /// Push an event to every session in the room; returns how many queues
    /// accepted it. A failed send means the session's drain task is gone;
    /// it is skipped, and the disconnect path owns the cleanup.
    pub fn deliver(&self, channel_id: Uuid, event: &ServerEvent) -> usize {
        let Some(room) = self.rooms.get(&channel_id) else {
            return 0;
        };
        let mut delivered = 0;
        for sender in room.values() {
            if sender.send(event.clone()).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    pub fn occupancy(&self, channel_id: Uuid) -> usize {
        self.rooms.get(&channel_id).map(|r| r.len()).unwrap_or(0)
    }

    pub fn contains(&self, channel_id: Uuid, session_id: Uuid) -> bool {
        self.rooms
            .get(&channel_id)
            .map(|r| r.contains_key(&session_id))
            .unwrap_or(false)
    }

    /// Drop room entries with no subscribers left. Run periodically; an
    /// empty entry is harmless but there is no point keeping one per
    /// channel ever visited.
    pub fn prune_empty(&self) -> usize {
        let before = self.rooms.len();
        self.rooms.retain(|_, room| !room.is_empty());
        before - self.rooms.len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}
