//! WebSocket event frames
//!
//! The live transport speaks JSON text frames tagged by a `type` field.
//! `ClientEvent` is what a connected client may send (room subscription
//! control), `ServerEvent` is what the backend pushes (new messages and
//! presence snapshots). Message history is never replayed over the socket;
//! clients pull it through the HTTP read surface.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::message::ChatMessage;

/// Frames a client may send after the socket is established.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientEvent {
    /// Subscribe this session to a channel's live room
    JoinChannel { channel_id: Uuid },
    /// Drop this session from a channel's live room
    LeaveChannel { channel_id: Uuid },
}

/// Frames the backend pushes to connected sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// A newly appended message, delivered to every session in the
    /// channel's room in append order
    Message(ChatMessage),
    /// Full online-user snapshot, sent to every session on each presence
    /// transition
    PresenceSnapshot { online: Vec<Uuid> },
    /// Terminal answer to a client frame the backend refused
    Error { message: String },
}
