//! Request types for the workspace endpoints
//!
//! Responses serialize the [`Workspace`](crate::backend::workspace::store::Workspace)
//! domain type directly, so only the inbound shapes live here.

use serde::Deserialize;

/// Request body for POST /api/workspaces
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkspaceRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for POST /api/workspaces/join
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinWorkspaceRequest {
    pub invite_code: String,
}
