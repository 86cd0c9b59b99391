//! Chat message wire shape
//!
//! `ChatMessage` is the form a message takes everywhere outside the store:
//! in `POST /api/messages` responses, in `GET /api/messages/{channelId}`
//! history arrays, and inside `"message"` WebSocket frames. The id and
//! timestamp are always server-assigned; clients never supply them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sender identity as clients see it: stable id plus display name.
///
/// The username is denormalized into the message at append time so readers
/// never need a second lookup to render history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageSender {
    /// The sender's user id
    pub id: Uuid,
    /// The sender's display name at the time the message was sent
    pub username: String,
}

/// A single chat message, immutable once created.
///
/// Serialized with camelCase keys to match the JSON surface the web client
/// consumes:
///
/// ```json
/// {
///   "id": "…",
///   "channelId": "…",
///   "sender": {"id": "…", "username": "alice"},
///   "content": "hello",
///   "createdAt": "2025-01-01T00:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Server-assigned message id
    pub id: Uuid,
    /// Channel this message belongs to
    pub channel_id: Uuid,
    /// Who sent it
    pub sender: MessageSender,
    /// Message body, non-empty, already trimmed by the ingest pipeline
    pub content: String,
    /// Server-assigned creation time (UTC)
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message with a fresh id and the current timestamp.
    ///
    /// Called only by the message store while it holds the channel's
    /// ordering guard, so ids and timestamps are assigned in append order.
    pub fn new(channel_id: Uuid, sender: MessageSender, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel_id,
            sender,
            content,
            created_at: Utc::now(),
        }
    }

    /// Sort key for history ordering: ascending creation time, message id
    /// as the stable tie-break for equal timestamps.
    pub fn sort_key(&self) -> (DateTime<Utc>, Uuid) {
        (self.created_at, self.id)
    }
}
