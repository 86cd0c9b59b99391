//! Messaging HTTP Handlers
//!
//! POST /api/messages and GET /api/messages/{channelId}. The POST handler is
//! a thin shim over the ingest pipeline; the GET handler runs the shared
//! Read authorization and serves the channel's history ascending.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::channel::authorize::{authorize, ChannelAction};
use crate::backend::error::ApiError;
use crate::backend::messaging::pipeline::submit_message;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::ChatMessage;

/// Request body for POST /api/messages
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub channel_id: Uuid,
    pub content: String,
}

/// Send a message through the ingest pipeline.
///
/// # Errors
///
/// * `400 Bad Request` - empty or over-long content
/// * `404 Not Found` - unknown channel
/// * `403 Forbidden` - sender is not a channel member
pub async fn send_message(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    let message = submit_message(&state, auth.user_id, request.channel_id, &request.content).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// List a channel's messages, ascending by creation time.
///
/// # Errors
///
/// * `404 Not Found` - unknown channel
/// * `403 Forbidden` - caller is not a channel member
pub async fn list_channel_messages(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(channel_id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    authorize(&state.channels, auth.user_id, channel_id, ChannelAction::Read)
        .await
        .into_result()?;

    let messages = state.messages.list(channel_id).await;
    Ok(Json(messages))
}
