//! Shared Module
//!
//! Types that cross the wire between the backend and its clients: the
//! message shape returned by the HTTP API and the event frames exchanged
//! over the WebSocket transport. Everything here is plain serializable
//! data; behavior lives in the backend modules.

/// Chat message wire shape
pub mod message;

/// WebSocket event frames
pub mod event;

/// Re-export commonly used types for convenience
pub use event::{ClientEvent, ServerEvent};
pub use message::{ChatMessage, MessageSender};
