//! Current User Handler
//!
//! GET /api/auth/me
//!
//! Returns the authenticated user's public view. The route sits behind the
//! auth middleware, so the identity arrives via the [`AuthUser`] extractor
//! rather than by re-parsing the Authorization header here.

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Current user handler
///
/// # Errors
///
/// * `404 Not Found` - token is valid but the user no longer exists
pub async fn me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .get(auth.user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(&user)))
}
