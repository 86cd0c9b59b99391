//! Huddle - Team Chat Backend
//!
//! Huddle is a team-chat backend built on axum and tokio. It provides user
//! accounts, workspaces joined by invite code, channels with explicit
//! membership, durable per-channel message logs, and websocket fan-out with
//! presence tracking.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types crossing the wire between server and clients:
//!   chat messages and the websocket event vocabulary
//! - **`backend`** - The server: HTTP routes, authentication, the
//!   workspace/channel/message directories, and the realtime hub
//!
//! # Usage
//!
//! ```rust,no_run
//! use huddle::backend::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve with axum::serve
//! # }
//! ```
//!
//! # Delivery Guarantee
//!
//! Within a channel, the order messages are appended to the durable log is
//! the order every websocket subscriber receives them. See
//! `backend::messaging::pipeline` for how the two orders are kept identical.
//!
//! # Persistence
//!
//! The in-memory directories are authoritative. When `DATABASE_URL` is
//! configured they are mirrored to PostgreSQL and replayed at startup;
//! without it the server runs memory-only.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
