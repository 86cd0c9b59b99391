//! Application state shared by every HTTP handler and websocket session.
//!
//! `AppState` is the single state container handed to the axum router. The
//! in-memory directories are authoritative; the database pool, when present,
//! only mirrors them for durability across restarts. Handlers must therefore
//! never treat a `None` pool as an error.
//!
//! All fields are cheap to clone: directories sit behind `Arc`, and `PgPool`
//! is internally reference-counted.

use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::auth::users::UserDirectory;
use crate::backend::channel::store::ChannelDirectory;
use crate::backend::messaging::store::MessageStore;
use crate::backend::realtime::hub::RealtimeHub;
use crate::backend::workspace::store::WorkspaceDirectory;

/// Central application state for the axum server.
#[derive(Clone)]
pub struct AppState {
    /// Registered accounts, indexed by id, username, and email.
    pub users: Arc<UserDirectory>,

    /// Workspaces with their member rosters and invite codes.
    pub workspaces: Arc<WorkspaceDirectory>,

    /// Channels with their member rosters.
    pub channels: Arc<ChannelDirectory>,

    /// Per-channel append-only message logs.
    pub messages: Arc<MessageStore>,

    /// Live websocket sessions, room subscriptions, and presence.
    pub hub: Arc<RealtimeHub>,

    /// Database connection pool.
    ///
    /// `None` when `DATABASE_URL` is not configured; the server then runs
    /// purely in memory and loses state on restart.
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Creates empty state, with or without a database mirror.
    pub fn new(db_pool: Option<PgPool>) -> Self {
        Self {
            users: Arc::new(UserDirectory::new()),
            workspaces: Arc::new(WorkspaceDirectory::new()),
            channels: Arc::new(ChannelDirectory::new()),
            messages: Arc::new(MessageStore::new()),
            hub: Arc::new(RealtimeHub::new()),
            db_pool,
        }
    }
}
