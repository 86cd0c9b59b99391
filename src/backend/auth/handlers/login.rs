//! Login Handler
//!
//! POST /api/auth/login
//!
//! # Authentication Process
//!
//! 1. Look up the user by email (case-insensitive)
//! 2. Verify the password against the stored bcrypt hash
//! 3. Return a JWT token and the user's public view
//!
//! Unknown emails and wrong passwords both produce the same 401 so the
//! response does not reveal which accounts exist.

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - hash verification or token generation failed
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login attempt for email: {}", request.email);

    let user = state
        .users
        .get_by_email(&request.email)
        .await
        .ok_or_else(|| {
            tracing::warn!("Login failed: no user with email {}", request.email);
            ApiError::unauthorized("Invalid email or password")
        })?;

    let password_matches = verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::internal(format!("failed to verify password: {e}")))?;

    if !password_matches {
        tracing::warn!("Login failed: wrong password for {}", request.email);
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = create_token(user.id, user.email.clone(), user.username.clone())
        .map_err(|e| ApiError::internal(format!("failed to create token: {e}")))?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
