//! Server fixtures and domain builders
//!
//! Builders go through the actual HTTP endpoints so setup exercises the
//! same code paths a client would. Each returns the parsed response body;
//! non-success setup responses panic with the body text for quick triage.

use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use huddle::backend::routes::create_router;
use huddle::backend::server::AppState;

use crate::common::auth_helpers::{auth_header, TestUser};

/// A test server over fresh in-memory state, no database attached.
pub fn test_server() -> TestServer {
    TestServer::new(create_router(AppState::new(None))).unwrap()
}

/// A test server plus the state behind it, for tests that reach into the
/// realtime hub or the message store directly.
pub fn test_server_with_state() -> (TestServer, AppState) {
    let state = AppState::new(None);
    let server = TestServer::new(create_router(state.clone())).unwrap();
    (server, state)
}

/// Uuid out of a JSON body's `id` field.
pub fn id_of(value: &Value) -> Uuid {
    value["id"].as_str().unwrap().parse().unwrap()
}

/// Creates a workspace and returns its body.
pub async fn create_workspace(server: &TestServer, owner: &TestUser, name: &str) -> Value {
    let response = server
        .post("/api/workspaces")
        .add_header(AUTHORIZATION, auth_header(&owner.token))
        .json(&json!({ "name": name }))
        .await;
    assert_eq!(
        response.status_code().as_u16(),
        201,
        "create workspace failed: {}",
        response.text()
    );
    response.json()
}

/// Creates a channel in a workspace and returns its body.
pub async fn create_channel(
    server: &TestServer,
    creator: &TestUser,
    workspace_id: Uuid,
    name: &str,
) -> Value {
    let response = server
        .post("/api/channels")
        .add_header(AUTHORIZATION, auth_header(&creator.token))
        .json(&json!({ "workspaceId": workspace_id, "name": name }))
        .await;
    assert_eq!(
        response.status_code().as_u16(),
        201,
        "create channel failed: {}",
        response.text()
    );
    response.json()
}

/// Joins a workspace by invite code and returns the workspace body.
pub async fn join_workspace(server: &TestServer, user: &TestUser, invite_code: &str) -> Value {
    let response = server
        .post("/api/workspaces/join")
        .add_header(AUTHORIZATION, auth_header(&user.token))
        .json(&json!({ "inviteCode": invite_code }))
        .await;
    assert_eq!(
        response.status_code().as_u16(),
        200,
        "join workspace failed: {}",
        response.text()
    );
    response.json()
}

/// Adds a user to a channel's roster.
pub async fn add_channel_member(
    server: &TestServer,
    caller: &TestUser,
    channel_id: Uuid,
    user_id: Uuid,
) -> Value {
    let response = server
        .post(&format!("/api/channels/{}/members", channel_id))
        .add_header(AUTHORIZATION, auth_header(&caller.token))
        .json(&json!({ "userId": user_id }))
        .await;
    assert_eq!(
        response.status_code().as_u16(),
        200,
        "add channel member failed: {}",
        response.text()
    );
    response.json()
}

/// Sends a message and returns its body.
pub async fn send_message(
    server: &TestServer,
    sender: &TestUser,
    channel_id: Uuid,
    content: &str,
) -> Value {
    let response = server
        .post("/api/messages")
        .add_header(AUTHORIZATION, auth_header(&sender.token))
        .json(&json!({ "channelId": channel_id, "content": content }))
        .await;
    assert_eq!(
        response.status_code().as_u16(),
        201,
        "send message failed: {}",
        response.text()
    );
    response.json()
}
