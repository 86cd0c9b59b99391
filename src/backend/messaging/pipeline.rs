//! Message Ingest Pipeline
//!
//! The single entry point every message submission goes through, whatever
//! transport it arrived on:
//!
//! 1. Validate the content (non-empty after trim, within the length cap)
//! 2. Authorize: sender must be a channel member
//! 3. Enrich with the sender's display name
//! 4. Append to the channel's durable log
//! 5. Hand to the fan-out router while still holding the channel's append
//!    guard
//! 6. Return the enriched message as the write acknowledgement
//!
//! Steps 4-5 run under the channel's log mutex, so for any two submissions
//! to one channel the durable append order equals the live delivery order.
//! The delivery pushes are non-blocking queue sends; nothing else happens
//! under the guard. Membership checks and the username lookup run before
//! it, the database mirror after it.
//!
//! A refused submission (forbidden, invalid, unknown channel) never touches
//! the log and never reaches a room.

use uuid::Uuid;

use crate::backend::channel::authorize::{authorize, ChannelAction};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::{ChatMessage, MessageSender, ServerEvent};

/// Upper bound on message content length, in characters.
pub const MAX_CONTENT_LEN: usize = 10_000;

/// Submit a message to a channel on behalf of an authenticated sender.
///
/// # Errors
///
/// * `Validation` - content empty after trimming, or over the length cap
/// * `NotFound` - unknown channel
/// * `Forbidden` - sender is not a channel member
/// * `Unauthorized` - sender id no longer resolves to a user
pub async fn submit_message(
    state: &AppState,
    sender_id: Uuid,
    channel_id: Uuid,
    content: &str,
) -> Result<ChatMessage, ApiError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ApiError::validation("Message content is required"));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(ApiError::validation(
            "Message content must be at most 10000 characters",
        ));
    }

    authorize(&state.channels, sender_id, channel_id, ChannelAction::Post)
        .await
        .into_result()?;

    let username = state
        .users
        .username_of(sender_id)
        .await
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    // Append + deliver under the channel's guard: the timestamp is assigned
    // here so it is monotone within the channel, and no await happens while
    // the guard is held.
    let log = state.messages.log_handle(channel_id);
    let message = {
        let mut log = log.lock().await;
        let message = ChatMessage::new(
            channel_id,
            MessageSender {
                id: sender_id,
                username,
            },
            content.to_string(),
        );
        log.push(message.clone());
        let delivered = state
            .hub
            .deliver(channel_id, &ServerEvent::Message(message.clone()));
        tracing::debug!(
            "Message {} appended to channel {}, delivered to {} sessions",
            message.id,
            channel_id,
            delivered
        );
        message
    };

    if let Some(pool) = &state.db_pool {
        if let Err(e) = crate::backend::messaging::db::save_message(pool, &message).await {
            tracing::error!("Failed to save message to database: {:?}", e);
        }
    }

    Ok(message)
}
