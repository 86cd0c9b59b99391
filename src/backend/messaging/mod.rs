//! Messaging Module
//!
//! Durable channel message logs and the ingest pipeline that feeds them.
//! Every submission, from HTTP today or any future transport, flows
//! through [`pipeline::submit_message`], which owns the one ordering
//! guarantee the whole system leans on: per channel, durable append order
//! equals live delivery order.
//!
//! # Module Structure
//!
//! ```text
//! messaging/
//! ├── mod.rs       - Module exports and documentation
//! ├── store.rs     - Per-channel append-only logs
//! ├── pipeline.rs  - validate -> authorize -> append -> deliver
//! ├── db.rs        - Database mirror
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;
pub mod handlers;
pub mod pipeline;
pub mod store;

pub use handlers::{list_channel_messages, send_message, SendMessageRequest};
pub use pipeline::{submit_message, MAX_CONTENT_LEN};
pub use store::MessageStore;
