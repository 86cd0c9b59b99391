//! Authentication Middleware
//!
//! Protects routes that require an authenticated user. Extracts and verifies
//! the JWT from the Authorization header, resolves the user against the
//! directory, and attaches an [`AuthenticatedUser`] to the request extensions
//! for handlers to pick up via the [`AuthUser`] extractor.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::{user_id_from_claims, verify_token};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Identity established by the auth middleware
///
/// This is the only identity handlers ever see: a user id plus the username
/// used when labelling messages and presence.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Authentication middleware
///
/// 1. Extracts the JWT from the Authorization header (format: "Bearer <token>")
/// 2. Verifies the token signature and expiry
/// 3. Resolves the user id against the directory
/// 4. Attaches [`AuthenticatedUser`] to request extensions
///
/// Returns 401 if the token is missing, malformed, expired, or names a user
/// that no longer exists.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Missing Authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Invalid Authorization header format")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    let user_id = user_id_from_claims(&claims).map_err(|e| {
        tracing::error!("Invalid user ID in token: {}", e);
        ApiError::unauthorized("Invalid token")
    })?;

    // The token may outlive the account; the directory is authoritative.
    let username = state.users.username_of(user_id).await.ok_or_else(|| {
        tracing::warn!("Token references unknown user: {}", user_id);
        ApiError::unauthorized("Unknown user")
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id, username });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Not authenticated")
            })?;

        Ok(AuthUser(user))
    }
}
