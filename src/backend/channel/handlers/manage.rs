//! Channel CRUD Handlers
//!
//! POST /api/channels, GET /api/channels/{id}
//!
//! Creation is a roster-growth point, so it checks workspace membership;
//! reads go through the shared channel authorization gate.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::channel::authorize::{authorize, ChannelAction};
use crate::backend::channel::handlers::types::{ChannelResponse, CreateChannelRequest};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Create a channel inside a workspace. The caller becomes the first member.
///
/// # Errors
///
/// * `400 Bad Request` - empty or over-long name
/// * `404 Not Found` - unknown workspace
/// * `403 Forbidden` - caller is not a workspace member
pub async fn create_channel(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<CreateChannelRequest>,
) -> Result<(StatusCode, Json<ChannelResponse>), ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Channel name is required"));
    }
    if name.len() > 100 {
        return Err(ApiError::validation(
            "Channel name must be at most 100 characters",
        ));
    }

    let workspace = state
        .workspaces
        .get(request.workspace_id)
        .await
        .ok_or_else(|| ApiError::not_found("Workspace not found"))?;

    if !workspace.is_member(auth.user_id) {
        return Err(ApiError::forbidden(
            "You are not a member of this workspace",
        ));
    }

    let channel = state
        .channels
        .create(name.to_string(), workspace.id, auth.user_id)
        .await;
    state
        .workspaces
        .add_channel_link(workspace.id, channel.id)
        .await;

    if let Some(pool) = &state.db_pool {
        if let Err(e) = crate::backend::channel::db::save_channel(pool, &channel).await {
            tracing::error!("Failed to save channel to database: {:?}", e);
        }
        if let Err(e) =
            crate::backend::channel::db::save_channel_member(pool, channel.id, auth.user_id).await
        {
            tracing::error!("Failed to save channel member to database: {:?}", e);
        }
    }

    tracing::info!(
        "Channel created: #{} ({}) in workspace {}",
        channel.name,
        channel.id,
        workspace.id
    );

    Ok((StatusCode::CREATED, Json(ChannelResponse::from(&channel))))
}

/// Fetch one channel.
///
/// # Errors
///
/// * `404 Not Found` - unknown channel
/// * `403 Forbidden` - caller is not a channel member
pub async fn get_channel(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(channel_id): Path<Uuid>,
) -> Result<Json<ChannelResponse>, ApiError> {
    authorize(&state.channels, auth.user_id, channel_id, ChannelAction::Read)
        .await
        .into_result()?;

    let channel = state
        .channels
        .get(channel_id)
        .await
        .ok_or_else(|| ApiError::not_found("Channel not found"))?;

    Ok(Json(ChannelResponse::from(&channel)))
}
