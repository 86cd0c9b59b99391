//! Server initialization.
//!
//! `create_app` wires the whole backend together: it loads the optional
//! database, restores the in-memory directories from it, builds the router,
//! and spawns the background sweep for empty channel rooms.
//!
//! Startup is resilient by design. A missing database, a failed migration,
//! or an unreadable table each log a warning and leave the affected
//! directory empty instead of aborting.

use std::time::Duration;

use axum::Router;

use crate::backend::routes::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Interval between sweeps for channel rooms with no subscribers left.
const ROOM_PRUNE_INTERVAL: Duration = Duration::from_secs(300);

/// Creates the configured axum application.
///
/// Loads the database (if `DATABASE_URL` is set), restores users,
/// workspaces, channels, and messages into the in-memory directories,
/// and returns the router ready to serve.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing huddle backend server");

    let db_pool = load_database().await;
    let state = AppState::new(db_pool);

    // Restore before the router exists so no request sees partial state.
    if let Some(pool) = state.db_pool.clone() {
        restore_state(&pool, &state).await;
    }

    let app = create_router(state.clone());

    // Rooms outlive their last subscriber until this sweep collects them.
    let hub = state.hub.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ROOM_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let pruned = hub.prune_empty_rooms();
            if pruned > 0 {
                tracing::debug!("Pruned {} empty channel rooms", pruned);
            }
        }
    });

    tracing::info!("Router configured");

    app
}

/// Restores directories from the database, in referential order:
/// users first, then workspaces, channels, and finally messages.
///
/// Each collection that fails to load is logged and skipped. The server
/// still starts; it just begins with that directory empty.
async fn restore_state(pool: &sqlx::PgPool, state: &AppState) {
    use crate::backend::auth::db::load_users;
    use crate::backend::channel::db::load_channels;
    use crate::backend::messaging::db::load_messages;
    use crate::backend::workspace::db::load_workspaces;

    tracing::info!("Restoring state from database...");

    match load_users(pool).await {
        Ok(users) => {
            tracing::info!("Loaded {} users from database", users.len());
            for user in users {
                state.users.restore(user).await;
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load users from database: {:?}", e);
        }
    }

    match load_workspaces(pool).await {
        Ok(workspaces) => {
            tracing::info!("Loaded {} workspaces from database", workspaces.len());
            for workspace in workspaces {
                state.workspaces.restore(workspace).await;
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load workspaces from database: {:?}", e);
        }
    }

    match load_channels(pool).await {
        Ok(channels) => {
            tracing::info!("Loaded {} channels from database", channels.len());
            for channel in channels {
                // Channel links are not stored on the workspace row; rebuild
                // them from the channel side.
                state
                    .workspaces
                    .add_channel_link(channel.workspace_id, channel.id)
                    .await;
                state.channels.restore(channel).await;
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load channels from database: {:?}", e);
        }
    }

    match load_messages(pool).await {
        Ok(messages) => {
            tracing::info!("Loaded {} messages from database", messages.len());
            for message in messages {
                state.messages.restore(message).await;
            }
        }
        Err(e) => {
            tracing::warn!("Failed to load messages from database: {:?}", e);
        }
    }

    tracing::info!("State restored from database");
}
