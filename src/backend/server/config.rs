//! Server configuration loaded from the environment.
//!
//! Configuration problems never abort startup. A missing or unreachable
//! database downgrades the server to memory-only mode, and a malformed
//! `SERVER_PORT` falls back to the default. Every degradation is logged.

use sqlx::PgPool;

/// Port the HTTP server binds when `SERVER_PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Reads `SERVER_PORT` from the environment.
///
/// Falls back to [`DEFAULT_PORT`] when the variable is absent or does not
/// parse as a port number.
pub fn server_port() -> u16 {
    match std::env::var("SERVER_PORT") {
        Ok(raw) => match raw.parse() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!("SERVER_PORT is not a valid port: {}", raw);
                DEFAULT_PORT
            }
        },
        Err(_) => DEFAULT_PORT,
    }
}

/// Connects to PostgreSQL and runs pending migrations.
///
/// Returns `None` when `DATABASE_URL` is unset or the connection fails.
/// The server then runs without persistence rather than refusing to start,
/// so callers must treat `None` as a valid configuration.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Running without persistence.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Running without persistence.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already be applied by an earlier deployment.
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing with the existing schema");
        }
    }

    Some(pool)
}
