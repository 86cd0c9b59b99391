//! API Error Types
//!
//! One error enum covers every failure a handler or the ingest pipeline can
//! surface. The taxonomy is deliberately small and maps one-to-one onto HTTP
//! status codes:
//!
//! - `Unauthorized` - no, invalid, or expired identity
//! - `Forbidden` - valid identity, insufficient membership
//! - `NotFound` - workspace/channel/user absent
//! - `Validation` - client-correctable input (empty message, bad name, ...)
//! - `Conflict` - benign duplicates (already a member, email taken)
//! - `Internal` - storage or serialization failure; detail is logged, the
//!   client gets a generic body

use axum::http::StatusCode;
use thiserror::Error;

/// All errors surfaced by the API and the ingest pipeline.
///
/// # Example
///
/// ```rust
/// use huddle::backend::error::ApiError;
///
/// let err = ApiError::forbidden("You are not a member of this channel");
/// assert_eq!(err.status_code().as_u16(), 403);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid bearer identity
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed to perform the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Referenced workspace, channel, or user does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Benign duplicate, surfaced informationally rather than as a failure
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unexpected failure; the message is for the log, not the client
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message suitable for the response body.
    ///
    /// `Internal` errors are masked; their detail goes to the log in
    /// `IntoResponse`, never to the client.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
