//! Channel Access Control
//!
//! The single authorization gate for everything channel-scoped: history
//! reads, message posts, and live-room joins all call [`authorize`]. No
//! caller re-implements the membership rule, so the read path and the write
//! path cannot drift apart.
//!
//! Channel membership is the canonical authority. Workspace membership is a
//! prerequisite enforced where rosters grow (channel creation, member add),
//! not re-checked here on every message.

use uuid::Uuid;

use crate::backend::channel::store::ChannelDirectory;
use crate::backend::error::ApiError;

/// What the caller wants to do with the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelAction {
    /// List history or join the live room.
    Read,
    /// Append a message.
    Post,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    /// Valid identity, insufficient membership.
    Forbidden(&'static str),
    /// The channel does not exist. Distinct from Forbidden so callers can
    /// answer 404 instead of leaking "exists but not yours".
    NotFound,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    /// Convert into the error surface used by HTTP handlers.
    pub fn into_result(self) -> Result<(), ApiError> {
        match self {
            AccessDecision::Allowed => Ok(()),
            AccessDecision::Forbidden(reason) => Err(ApiError::forbidden(reason)),
            AccessDecision::NotFound => Err(ApiError::not_found("Channel not found")),
        }
    }
}

/// Decide whether `user_id` may perform `action` on `channel_id`.
pub async fn authorize(
    channels: &ChannelDirectory,
    user_id: Uuid,
    channel_id: Uuid,
    action: ChannelAction,
) -> AccessDecision {
    match channels.membership(channel_id, user_id).await {
        None => AccessDecision::NotFound,
        Some(true) => AccessDecision::Allowed,
        Some(false) => {
            let reason = match action {
                ChannelAction::Read => "You are not a member of this channel",
                ChannelAction::Post => "You cannot post to a channel you are not a member of",
            };
            AccessDecision::Forbidden(reason)
        }
    }
}
