//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS, auth middleware layering
//! └── api_routes.rs   - Authenticated REST endpoints
//! ```
//!
//! # Route Organization
//!
//! The router is split into a public group and a protected group:
//!
//! - **Public** - `/health`, `/api/auth/signup`, `/api/auth/login`, and the
//!   `/ws` websocket upgrade (which authenticates from its `token` query
//!   parameter instead of a header)
//! - **Protected** - every other `/api` endpoint, behind the bearer-token
//!   middleware from `backend::middleware::auth`

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
