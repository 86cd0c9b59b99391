//! Request/response types for the channel endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::channel::store::Channel;

/// Request body for POST /api/channels
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelRequest {
    pub workspace_id: Uuid,
    pub name: String,
}

/// Request body for POST /api/channels/{id}/members
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

/// Public view of a channel. Members are sorted so the JSON is stable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub name: String,
    pub created_by: Uuid,
    pub members: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        let mut members: Vec<Uuid> = channel.members.iter().copied().collect();
        members.sort();
        Self {
            id: channel.id,
            workspace_id: channel.workspace_id,
            name: channel.name.clone(),
            created_by: channel.created_by,
            members,
            created_at: channel.created_at,
        }
    }
}

/// Response body for POST /api/channels/{id}/members
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberResponse {
    pub channel_id: Uuid,
    pub user_id: Uuid,
    /// True when the user was already a member; the call is a no-op then.
    pub already_member: bool,
}
