//! Router-level integration tests
//!
//! Health endpoint, the 404 fallback, and the authentication boundary
//! around the protected API group.

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use serde_json::Value;

use crate::common::fixtures::test_server;

#[tokio::test]
async fn test_health_reports_ok() {
    let server = test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_404() {
    let server = test_server();

    let response = server.get("/api/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_protected_routes_reject_missing_token() {
    let server = test_server();

    for path in ["/api/workspaces", "/api/auth/me"] {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "{} should require a token",
            path
        );
    }
}

#[tokio::test]
async fn test_protected_routes_reject_non_bearer_scheme() {
    let server = test_server();

    let response = server
        .get("/api/workspaces")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic abc123"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_bodies_carry_status_and_message() {
    let server = test_server();

    let response = server.get("/api/auth/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["status"], 401);
    assert!(body["error"].is_string());
}
