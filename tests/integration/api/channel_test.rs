//! Channel API integration tests
//!
//! Channel creation inside a workspace, membership-gated reads, and the
//! roster-growth rules. Channel membership is the only thing that grants
//! access to a channel; workspace membership alone never does.

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::auth_helpers::{auth_header, signup_user};
use crate::common::fixtures::{
    add_channel_member, create_channel, create_workspace, id_of, join_workspace, test_server,
};

#[tokio::test]
async fn test_create_channel_creator_is_sole_member() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;

    let response = server
        .post("/api/channels")
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "workspaceId": id_of(&workspace), "name": "general" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["name"], "general");
    assert_eq!(body["workspaceId"], id_of(&workspace).to_string());
    assert_eq!(body["createdBy"], alice.id.to_string());
    assert_eq!(body["members"], json!([alice.id.to_string()]));
}

#[tokio::test]
async fn test_create_channel_requires_workspace_membership() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let bob = signup_user(&server, "bob").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;

    let response = server
        .post("/api/channels")
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .json(&json!({ "workspaceId": id_of(&workspace), "name": "general" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_channel_unknown_workspace_not_found() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let response = server
        .post("/api/channels")
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "workspaceId": Uuid::new_v4(), "name": "general" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_channel_rejects_blank_name() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;

    let response = server
        .post("/api/channels")
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "workspaceId": id_of(&workspace), "name": "  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workspace_membership_does_not_grant_channel_access() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let bob = signup_user(&server, "bob").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel = create_channel(&server, &alice, id_of(&workspace), "general").await;

    // Bob joins the workspace through its invite code...
    let code = workspace["inviteCode"].as_str().unwrap();
    join_workspace(&server, &bob, code).await;

    // ...but the channel roster still does not include him.
    let response = server
        .get(&format!("/api/channels/{}", id_of(&channel)))
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    // Access appears the moment he is added explicitly.
    add_channel_member(&server, &alice, id_of(&channel), bob.id).await;
    let response = server
        .get(&format!("/api/channels/{}", id_of(&channel)))
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_unknown_channel_not_found() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let response = server
        .get(&format!("/api/channels/{}", Uuid::new_v4()))
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_member_is_idempotent() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let bob = signup_user(&server, "bob").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel = create_channel(&server, &alice, id_of(&workspace), "general").await;
    join_workspace(&server, &bob, workspace["inviteCode"].as_str().unwrap()).await;

    let first = add_channel_member(&server, &alice, id_of(&channel), bob.id).await;
    assert_eq!(first["alreadyMember"], false);

    let second = add_channel_member(&server, &alice, id_of(&channel), bob.id).await;
    assert_eq!(second["alreadyMember"], true);
}

#[tokio::test]
async fn test_add_member_requires_target_in_workspace() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let bob = signup_user(&server, "bob").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel = create_channel(&server, &alice, id_of(&workspace), "general").await;

    // Bob never joined the workspace.
    let response = server
        .post(&format!("/api/channels/{}/members", id_of(&channel)))
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "userId": bob.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_add_member_requires_caller_in_channel() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let bob = signup_user(&server, "bob").await;
    let carol = signup_user(&server, "carol").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel = create_channel(&server, &alice, id_of(&workspace), "general").await;
    let code = workspace["inviteCode"].as_str().unwrap();
    join_workspace(&server, &bob, code).await;
    join_workspace(&server, &carol, code).await;

    // Bob is in the workspace but not in the channel; he cannot grow its roster.
    let response = server
        .post(&format!("/api/channels/{}/members", id_of(&channel)))
        .add_header(AUTHORIZATION, auth_header(&bob.token))
        .json(&json!({ "userId": carol.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_add_unknown_user_not_found() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel = create_channel(&server, &alice, id_of(&workspace), "general").await;

    let response = server
        .post(&format!("/api/channels/{}/members", id_of(&channel)))
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "userId": Uuid::new_v4() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_member_unknown_channel_not_found() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let response = server
        .post(&format!("/api/channels/{}/members", Uuid::new_v4()))
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .json(&json!({ "userId": alice.id }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
