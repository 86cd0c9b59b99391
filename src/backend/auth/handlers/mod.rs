//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request/response types
//! ├── signup.rs   - POST /api/auth/signup
//! ├── login.rs    - POST /api/auth/login
//! └── me.rs       - GET /api/auth/me
//! ```

pub mod login;
pub mod me;
pub mod signup;
pub mod types;

pub use login::login;
pub use me::me;
pub use signup::signup;
pub use types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
