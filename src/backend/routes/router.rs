//! Router Configuration
//!
//! Assembles the complete axum router: public endpoints, the authenticated
//! API, the websocket upgrade, CORS, and the fallback.
//!
//! # Route Order
//!
//! Public routes are merged before the protected group so that signup and
//! login never pass through the bearer-token middleware. The websocket
//! endpoint is public at the HTTP layer because browsers cannot set an
//! `Authorization` header on the upgrade request; it authenticates itself
//! from the `token` query parameter before accepting the upgrade.

use axum::http::{Method, StatusCode};
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::backend::auth::{login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::realtime::ws_handler;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Creates the axum router with all routes configured.
///
/// Public endpoints:
/// - `GET /health` - Liveness probe
/// - `POST /api/auth/signup` - User registration
/// - `POST /api/auth/login` - User login
/// - `GET /ws` - Websocket upgrade (token-in-query authentication)
///
/// Everything under `configure_api_routes` requires a valid bearer token.
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let public = Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/ws", axum::routing::get(ws_handler));

    let protected = configure_api_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.clone(), auth_middleware),
    );

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(cors)
        .with_state(app_state)
}

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
