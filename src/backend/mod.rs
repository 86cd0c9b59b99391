//! Backend Module
//!
//! All server-side code for the huddle chat backend: an axum HTTP server
//! with JWT authentication, workspace and channel membership, durable
//! channel message logs, and websocket fan-out with presence tracking.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Signup/login, JWT tokens, the user directory
//! - **`workspace`** - Workspaces, invite codes, membership rosters
//! - **`channel`** - Channels, channel membership, access decisions
//! - **`messaging`** - Message logs and the ingest pipeline
//! - **`realtime`** - Websocket sessions, rooms, presence, fan-out
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - The `ApiError` taxonomy shared by all handlers
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and tokens
//! ├── workspace/      - Workspace directory
//! ├── channel/        - Channel directory and authorization
//! ├── messaging/      - Message store and ingest pipeline
//! ├── realtime/       - Websocket hub
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the in-memory directories (users, workspaces, channels,
//! messages) plus the realtime hub and the optional PostgreSQL pool. The
//! directories are authoritative; the database is a best-effort mirror that
//! is replayed into memory at startup.
//!
//! # Ordering Guarantee
//!
//! For any one channel, messages become visible to readers and are fanned
//! out to subscribers in the same order they were appended to the channel
//! log. The ingest pipeline in `messaging::pipeline` holds the channel log
//! lock across append and fan-out to keep those orders identical.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Workspace directory and invite codes
pub mod workspace;

/// Channel directory and access decisions
pub mod channel;

/// Message logs and ingest pipeline
pub mod messaging;

/// Websocket sessions, rooms, and presence
pub mod realtime;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, AppState};
