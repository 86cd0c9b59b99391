//! Realtime Module
//!
//! The live half of the system: session lifecycle, per-channel fan-out
//! rooms, presence tracking, and the WebSocket transport that drives them.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`session`** - Registry of connected sessions and their event queues
//! - **`rooms`** - channelId -> subscriber map used for message fan-out
//! - **`presence`** - Per-user Online/Offline state over live session sets
//! - **`hub`** - Composition of the three, driving the connect/join/deliver/
//!   disconnect lifecycle
//! - **`socket`** - The axum WebSocket handler (the only transport-aware
//!   file)
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs       - Module exports and documentation
//! ├── session.rs   - Session registry
//! ├── rooms.rs     - Channel room registry
//! ├── presence.rs  - Presence tracker
//! ├── hub.rs       - Lifecycle composition
//! └── socket.rs    - WebSocket transport
//! ```
//!
//! # Delivery Model
//!
//! Each session owns an unbounded event queue drained by a single writer
//! task; room delivery pushes onto those queues. The ingest pipeline calls
//! `deliver` while holding the channel's append guard, which pins live
//! delivery order to durable append order per channel. The live layer is
//! at-most-once: absent sessions catch up from message history.
//!
//! All registries are sharded concurrent maps; there is no process-wide
//! lock across channels or users.

pub mod hub;
pub mod presence;
pub mod rooms;
pub mod session;
pub mod socket;

pub use hub::RealtimeHub;
pub use presence::{PresenceTracker, PresenceTransition};
pub use rooms::RoomRegistry;
pub use session::{SessionHandle, SessionRegistry};
pub use socket::ws_handler;
