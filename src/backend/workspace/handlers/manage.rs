//! Workspace CRUD Handlers
//!
//! POST /api/workspaces, GET /api/workspaces, GET /api/workspaces/{id},
//! GET /api/workspaces/{id}/channels
//!
//! Reads are gated on workspace membership: non-members get 403, unknown ids
//! get 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::channel::handlers::types::ChannelResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::workspace::handlers::types::CreateWorkspaceRequest;
use crate::backend::workspace::store::{Role, Workspace};

/// Create a workspace. The caller becomes the sole `Admin` member.
///
/// # Errors
///
/// * `400 Bad Request` - empty or over-long name
pub async fn create_workspace(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<Workspace>), ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Workspace name is required"));
    }
    if name.len() > 100 {
        return Err(ApiError::validation(
            "Workspace name must be at most 100 characters",
        ));
    }

    let workspace = state
        .workspaces
        .create(name.to_string(), request.description, auth.user_id)
        .await;

    if let Some(pool) = &state.db_pool {
        if let Err(e) = crate::backend::workspace::db::save_workspace(pool, &workspace).await {
            tracing::error!("Failed to save workspace to database: {:?}", e);
        }
        if let Err(e) = crate::backend::workspace::db::save_workspace_member(
            pool,
            workspace.id,
            auth.user_id,
            Role::Admin,
        )
        .await
        {
            tracing::error!("Failed to save workspace member to database: {:?}", e);
        }
    }

    tracing::info!(
        "Workspace created: {} ({}) by {}",
        workspace.name,
        workspace.id,
        auth.username
    );

    Ok((StatusCode::CREATED, Json(workspace)))
}

/// List the workspaces the caller belongs to, oldest first.
pub async fn list_workspaces(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<Workspace>>, ApiError> {
    let workspaces = state.workspaces.list_for_user(auth.user_id).await;
    Ok(Json(workspaces))
}

/// Fetch one workspace with its member entries.
///
/// # Errors
///
/// * `404 Not Found` - unknown workspace id
/// * `403 Forbidden` - caller is not a member
pub async fn get_workspace(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<Workspace>, ApiError> {
    let workspace = state
        .workspaces
        .get(workspace_id)
        .await
        .ok_or_else(|| ApiError::not_found("Workspace not found"))?;

    if !workspace.is_member(auth.user_id) {
        return Err(ApiError::forbidden(
            "You are not a member of this workspace",
        ));
    }

    Ok(Json(workspace))
}

/// List the channels of a workspace, in creation order.
///
/// # Errors
///
/// * `404 Not Found` - unknown workspace id
/// * `403 Forbidden` - caller is not a member
pub async fn list_workspace_channels(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<Vec<ChannelResponse>>, ApiError> {
    let workspace = state
        .workspaces
        .get(workspace_id)
        .await
        .ok_or_else(|| ApiError::not_found("Workspace not found"))?;

    if !workspace.is_member(auth.user_id) {
        return Err(ApiError::forbidden(
            "You are not a member of this workspace",
        ));
    }

    let channels = state.channels.list_for_workspace(workspace_id).await;
    let responses = channels.iter().map(ChannelResponse::from).collect();
    Ok(Json(responses))
}
