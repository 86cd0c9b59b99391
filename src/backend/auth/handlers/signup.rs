//! Signup Handler
//!
//! POST /api/auth/signup
//!
//! # Registration Process
//!
//! 1. Validate username, email, and password
//! 2. Hash the password with bcrypt
//! 3. Insert into the user directory (atomic uniqueness check)
//! 4. Mirror to the database when one is configured
//! 5. Return a JWT token and the user's public view
//!
//! # Validation
//!
//! - Username: 3-30 chars, starts with a letter, alphanumeric + underscore
//! - Email must contain '@' (basic validation)
//! - Password must be at least 8 characters

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::InsertUserError;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid username/email format or password too short
/// * `409 Conflict` - email or username already registered
/// * `500 Internal Server Error` - password hashing or token generation failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(ApiError::validation(
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation("Invalid email format"));
    }

    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {e}")))?;

    let user = state
        .users
        .insert(request.username, request.email, password_hash)
        .await
        .map_err(|e| match e {
            InsertUserError::EmailTaken => ApiError::conflict("Email already registered"),
            InsertUserError::UsernameTaken => ApiError::conflict("Username already taken"),
        })?;

    if let Some(pool) = &state.db_pool {
        if let Err(e) = crate::backend::auth::db::save_user(pool, &user).await {
            tracing::error!("Failed to save user to database: {:?}", e);
            // Don't fail the request if the mirror write fails
        }
    }

    let token = create_token(user.id, user.email.clone(), user.username.clone())
        .map_err(|e| ApiError::internal(format!("failed to create token: {e}")))?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(&user),
    }))
}
