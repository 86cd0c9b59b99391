//! Authentication Module
//!
//! This module handles user accounts, registration, and token-based identity.
//! It provides HTTP handlers for the account endpoints and manages user data
//! and JWT tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and in-memory directory
//! - **`sessions`** - JWT token generation and validation
//! - **`db`** - Database mirror for user records
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and directory
//! ├── sessions.rs     - JWT token management
//! ├── db.rs           - Database persistence
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: User provides username, email, password → User created → JWT returned
//! 2. **Login**: User provides email and password → Credentials verified → JWT returned
//! 3. **Me**: User provides JWT token → Token verified → User info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 24 hours
//! - Invalid credentials return 401 (no information leakage)

pub mod db;
pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{login, me, signup};
pub use users::{User, UserDirectory};
