//! Channel Module
//!
//! Channels are the message rooms of a workspace, and channel membership is
//! the single authority that decides who may read history, post, and join
//! the live room. That rule lives in [`authorize`] and every channel-scoped
//! operation goes through it.
//!
//! # Module Structure
//!
//! ```text
//! channel/
//! ├── mod.rs        - Module exports and documentation
//! ├── store.rs      - Channel model and directory
//! ├── authorize.rs  - The shared access gate (read / post / room join)
//! ├── db.rs         - Database mirror
//! └── handlers/     - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── manage.rs
//!     └── members.rs
//! ```
//!
//! # Access Model
//!
//! - Workspace membership gates roster growth: creating a channel and adding
//!   a member both require it
//! - Channel membership gates everything else: history, posting, live rooms
//! - Joining a workspace grants no channel access by itself

pub mod authorize;
pub mod db;
pub mod handlers;
pub mod store;

pub use authorize::{authorize, AccessDecision, ChannelAction};
pub use handlers::{add_channel_member, create_channel, get_channel};
pub use store::{Channel, ChannelDirectory};
