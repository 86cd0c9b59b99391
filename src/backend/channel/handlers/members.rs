//! Channel Member-Add Handler
//!
//! POST /api/channels/{id}/members
//!
//! The only way into a channel after creation. The target must already
//! belong to the surrounding workspace; joining a workspace alone grants no
//! channel access.

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::channel::handlers::types::{AddMemberRequest, AddMemberResponse};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Add a user to a channel. Idempotent: re-adding an existing member
/// succeeds and flags `alreadyMember`.
///
/// # Errors
///
/// * `404 Not Found` - unknown channel or unknown target user
/// * `403 Forbidden` - caller is not a channel member, or the target is not
///   a member of the channel's workspace
pub async fn add_channel_member(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(channel_id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<AddMemberResponse>, ApiError> {
    let channel = state
        .channels
        .get(channel_id)
        .await
        .ok_or_else(|| ApiError::not_found("Channel not found"))?;

    if !channel.is_member(auth.user_id) {
        return Err(ApiError::forbidden("You are not a member of this channel"));
    }

    if !state.users.contains(request.user_id).await {
        return Err(ApiError::not_found("User not found"));
    }

    if !state
        .workspaces
        .is_member(channel.workspace_id, request.user_id)
        .await
    {
        return Err(ApiError::forbidden(
            "User is not a member of this workspace",
        ));
    }

    let newly_added = state
        .channels
        .add_member(channel_id, request.user_id)
        .await
        .ok_or_else(|| ApiError::not_found("Channel not found"))?;

    if newly_added {
        if let Some(pool) = &state.db_pool {
            if let Err(e) =
                crate::backend::channel::db::save_channel_member(pool, channel_id, request.user_id)
                    .await
            {
                tracing::error!("Failed to save channel member to database: {:?}", e);
            }
        }
        tracing::info!(
            "User {} added to channel {} by {}",
            request.user_id,
            channel_id,
            auth.username
        );
    }

    Ok(Json(AddMemberResponse {
        channel_id,
        user_id: request.user_id,
        already_member: !newly_added,
    }))
}
