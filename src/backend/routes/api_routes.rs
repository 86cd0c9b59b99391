//! API Route Handlers
//!
//! Configures the authenticated REST endpoints. Every route added here sits
//! behind the bearer-token middleware applied in `router.rs`; handlers can
//! therefore rely on the `AuthUser` extractor succeeding.
//!
//! # Routes
//!
//! ## Accounts
//! - `GET /api/auth/me` - Current account profile
//!
//! ## Workspaces
//! - `POST /api/workspaces` - Create a workspace
//! - `GET /api/workspaces` - List workspaces the caller belongs to
//! - `POST /api/workspaces/join` - Join a workspace by invite code
//! - `GET /api/workspaces/{workspace_id}` - Fetch one workspace
//! - `GET /api/workspaces/{workspace_id}/channels` - List its channels
//!
//! ## Channels
//! - `POST /api/channels` - Create a channel
//! - `GET /api/channels/{channel_id}` - Fetch one channel
//! - `POST /api/channels/{channel_id}/members` - Add a member
//!
//! ## Messages
//! - `POST /api/messages` - Send a message to a channel
//! - `GET /api/messages/{channel_id}` - Channel history, oldest first

use axum::Router;

use crate::backend::auth::me;
use crate::backend::channel::{add_channel_member, create_channel, get_channel};
use crate::backend::messaging::{list_channel_messages, send_message};
use crate::backend::server::state::AppState;
use crate::backend::workspace::{
    create_workspace, get_workspace, join_workspace, list_workspace_channels, list_workspaces,
};

/// Adds the authenticated API routes to the router.
///
/// The caller is responsible for layering the authentication middleware on
/// the result; nothing here checks tokens itself.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Account endpoints
        .route("/api/auth/me", axum::routing::get(me))
        // Workspace endpoints
        .route(
            "/api/workspaces",
            axum::routing::post(create_workspace).get(list_workspaces),
        )
        .route("/api/workspaces/join", axum::routing::post(join_workspace))
        .route(
            "/api/workspaces/{workspace_id}",
            axum::routing::get(get_workspace),
        )
        .route(
            "/api/workspaces/{workspace_id}/channels",
            axum::routing::get(list_workspace_channels),
        )
        // Channel endpoints
        .route("/api/channels", axum::routing::post(create_channel))
        .route("/api/channels/{channel_id}", axum::routing::get(get_channel))
        .route(
            "/api/channels/{channel_id}/members",
            axum::routing::post(add_channel_member),
        )
        // Message endpoints
        .route("/api/messages", axum::routing::post(send_message))
        .route(
            "/api/messages/{channel_id}",
            axum::routing::get(list_channel_messages),
        )
}
