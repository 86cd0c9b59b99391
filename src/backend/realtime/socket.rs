//! WebSocket Transport
//!
//! `GET /ws?token=<jwt>` upgrades to a socket. The token is verified before
//! the upgrade; a bad or missing one refuses the handshake with 401.
//!
//! Each connection runs two halves:
//! - a writer task draining the session's event queue onto the wire (queue
//!   order is wire order)
//! - the reader loop on the handler task, parsing client frames
//!
//! Inbound frames are `joinChannel` / `leaveChannel`. A join runs the shared
//! channel Read authorization first; a refused join is answered with an
//! error frame and no subscription. Unparseable frames are logged and
//! ignored.
//!
//! Whatever ends the reader loop (clean close, protocol error, dropped
//! network) lands in the same `disconnect` call, so abrupt teardown still
//! unregisters presence and leaves every room.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::auth::sessions::{user_id_from_claims, verify_token};
use crate::backend::channel::authorize::{authorize, AccessDecision, ChannelAction};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::{ClientEvent, ServerEvent};

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    #[serde(default)]
    token: Option<String>,
}

/// Upgrade handler for `GET /ws`.
///
/// # Errors
///
/// * `401 Unauthorized` - missing, invalid, or expired token
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let token = query
        .token
        .as_deref()
        .ok_or_else(|| ApiError::unauthorized("Missing token"))?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("WebSocket upgrade refused, invalid token: {:?}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;
    let user_id = user_id_from_claims(&claims)
        .map_err(|_| ApiError::unauthorized("Invalid token"))?;
    let username = state
        .users
        .username_of(user_id)
        .await
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user_id, username)))
}

async fn handle_socket(socket: WebSocket, state: AppState, user_id: Uuid, username: String) {
    let (session_id, mut events) = state.hub.connect(user_id, username).await;
    let (mut ws_tx, mut ws_rx) = socket.split();

    // Writer half: one task owns the sink, so frames go out in queue order.
    let writer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match serde_json::to_string(&event) {
                Ok(text) => {
                    if ws_tx.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize server event: {:?}", e);
                }
            }
        }
    });

    // Reader half: parse frames until the socket goes away, however it does.
    while let Some(result) = ws_rx.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Socket error on session {}: {:?}", session_id, e);
                break;
            }
        };
        match message {
            Message::Text(text) => {
                handle_client_frame(&state, session_id, user_id, text.as_str()).await;
            }
            Message::Close(_) => break,
            // Ping/pong are answered by the protocol layer.
            _ => {}
        }
    }

    state.hub.disconnect(session_id).await;
    writer.abort();
}

async fn handle_client_frame(state: &AppState, session_id: Uuid, user_id: Uuid, text: &str) {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(ClientEvent::JoinChannel { channel_id }) => {
            match authorize(&state.channels, user_id, channel_id, ChannelAction::Read).await {
                AccessDecision::Allowed => {
                    state.hub.join_room(session_id, channel_id);
                    tracing::debug!("Session {} joined room {}", session_id, channel_id);
                }
                AccessDecision::Forbidden(reason) => {
                    tracing::warn!(
                        "Refused room join: session {} channel {}",
                        session_id,
                        channel_id
                    );
                    state.hub.send_to(
                        session_id,
                        ServerEvent::Error {
                            message: reason.to_string(),
                        },
                    );
                }
                AccessDecision::NotFound => {
                    state.hub.send_to(
                        session_id,
                        ServerEvent::Error {
                            message: "Channel not found".to_string(),
                        },
                    );
                }
            }
        }
        Ok(ClientEvent::LeaveChannel { channel_id }) => {
            state.hub.leave_room(session_id, channel_id);
            tracing::debug!("Session {} left room {}", session_id, channel_id);
        }
        Err(e) => {
            tracing::debug!("Ignoring unparseable client frame: {:?}", e);
        }
    }
}
