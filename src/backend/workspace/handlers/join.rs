//! Invite-Code Join Handler
//!
//! POST /api/workspaces/join
//!
//! The membership check and append run as one atomic update inside the
//! directory, keyed on `(workspace, user)`. A repeat join is answered with a
//! 409 that the client can treat as informational, never with a duplicate
//! member entry.

use axum::{extract::State, response::Json};

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::workspace::handlers::types::JoinWorkspaceRequest;
use crate::backend::workspace::store::{InviteJoin, Role, Workspace};

/// Join a workspace by invite code.
///
/// # Errors
///
/// * `404 Not Found` - no workspace carries this code
/// * `409 Conflict` - caller is already a member (benign)
pub async fn join_workspace(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<JoinWorkspaceRequest>,
) -> Result<Json<Workspace>, ApiError> {
    let code = request.invite_code.trim();

    match state
        .workspaces
        .join_by_invite_code(auth.user_id, code)
        .await
    {
        InviteJoin::Joined(workspace) => {
            if let Some(pool) = &state.db_pool {
                if let Err(e) = crate::backend::workspace::db::save_workspace_member(
                    pool,
                    workspace.id,
                    auth.user_id,
                    Role::Member,
                )
                .await
                {
                    tracing::error!("Failed to save workspace member to database: {:?}", e);
                }
            }

            tracing::info!(
                "User {} joined workspace {} via invite code",
                auth.username,
                workspace.id
            );
            Ok(Json(workspace))
        }
        InviteJoin::AlreadyMember => Err(ApiError::conflict(
            "You are already a member of this workspace",
        )),
        InviteJoin::UnknownCode => Err(ApiError::not_found(
            "Invalid invite code or workspace not found",
        )),
    }
}
