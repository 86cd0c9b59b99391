//! Channel Handlers Module
//!
//! HTTP handlers for the channel endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request/response types
//! ├── manage.rs   - Create / fetch channels
//! └── members.rs  - Member add
//! ```

pub mod manage;
pub mod members;
pub mod types;

pub use manage::{create_channel, get_channel};
pub use members::add_channel_member;
pub use types::{AddMemberRequest, AddMemberResponse, ChannelResponse, CreateChannelRequest};
