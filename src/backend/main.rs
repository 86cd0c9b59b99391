//! Server entry point.
//!
//! Initializes logging, builds the application, and serves it. All the
//! interesting wiring lives in `backend::server::init`.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,huddle=debug")),
        )
        .init();

    tracing::info!("Starting huddle server v{}", env!("CARGO_PKG_VERSION"));

    let app = huddle::backend::server::create_app().await;

    let port = huddle::backend::server::config::server_port();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
