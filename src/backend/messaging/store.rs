//! Message Store
//!
//! Durable append-only message logs, one per channel, sharded in a
//! concurrent map. Each log sits behind its own async mutex: that mutex is
//! the per-channel serialization point the ingest pipeline holds across
//! append + live delivery, so durable order and delivery order cannot
//! diverge. Appends to different channels never contend.
//!
//! A completed append is visible to the next `list` call immediately; reads
//! take the same lock, so there is no eventual-consistency window within a
//! channel.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::shared::ChatMessage;

/// Per-channel append-only logs.
pub struct MessageStore {
    logs: DashMap<Uuid, Arc<Mutex<Vec<ChatMessage>>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            logs: DashMap::new(),
        }
    }

    /// The channel's log handle. The caller locks it to serialize
    /// append + deliver; the registry entry is created on first use.
    pub fn log_handle(&self, channel_id: Uuid) -> Arc<Mutex<Vec<ChatMessage>>> {
        self.logs.entry(channel_id).or_default().clone()
    }

    /// Messages of a channel in ascending creation order, ties broken by
    /// message id.
    pub async fn list(&self, channel_id: Uuid) -> Vec<ChatMessage> {
        let Some(log) = self.logs.get(&channel_id).map(|l| l.clone()) else {
            return Vec::new();
        };
        let log = log.lock().await;
        let mut messages = log.clone();
        // Appends keep insertion order, which already matches the sort key
        // unless the wall clock stepped; sorting a nearly-sorted vec is
        // cheap and makes the contract unconditional.
        messages.sort_by_key(|m| m.sort_key());
        messages
    }

    pub async fn count(&self, channel_id: Uuid) -> usize {
        match self.logs.get(&channel_id).map(|l| l.clone()) {
            Some(log) => log.lock().await.len(),
            None => 0,
        }
    }

    /// Re-append a message loaded from the database mirror at boot. Rows
    /// arrive pre-sorted by the loader.
    pub async fn restore(&self, message: ChatMessage) {
        let log = self.log_handle(message.channel_id);
        let mut log = log.lock().await;
        log.push(message);
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
