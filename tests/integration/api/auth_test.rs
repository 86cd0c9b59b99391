//! Authentication API integration tests
//!
//! Signup, login, and the `/api/auth/me` profile endpoint.

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_contains;
use crate::common::auth_helpers::{auth_header, signup_user};
use crate::common::fixtures::test_server;

#[tokio::test]
async fn test_signup_returns_token_and_profile() {
    let server = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert!(body["user"]["createdAt"].is_string());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let server = test_server();
    signup_user(&server, "alice").await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_contains!(body["error"].as_str().unwrap(), "Email already registered");
}

#[tokio::test]
async fn test_signup_duplicate_username_conflicts() {
    let server = test_server();
    signup_user(&server, "alice").await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_contains!(body["error"].as_str().unwrap(), "Username already taken");
}

#[tokio::test]
async fn test_signup_rejects_invalid_username() {
    let server = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "1alice",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_rejects_short_password() {
    let server = test_server();

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "short",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_fresh_token() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": alice.email,
            "password": alice.password,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({
            "email": alice.email,
            "password": "not-the-password",
        }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "ghost@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    // Same body either way, so the endpoint does not leak which emails exist.
    assert_eq!(wrong_password.json::<Value>(), unknown_email.json::<Value>());
}

#[tokio::test]
async fn test_me_returns_current_profile() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, auth_header(&alice.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["id"], alice.id.to_string());
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], alice.email);
}

#[tokio::test]
async fn test_me_without_token_unauthorized() {
    let server = test_server();

    let response = server.get("/api/auth/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token_unauthorized() {
    let server = test_server();

    let response = server
        .get("/api/auth/me")
        .add_header(AUTHORIZATION, auth_header("not-a-jwt"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
