//! Middleware Module
//!
//! HTTP middleware for the backend server. Middleware runs before handlers,
//! currently just authentication.
//!
//! # Architecture
//!
//! - **`auth`** - Authentication middleware for protecting routes

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
