//! Workspace Module
//!
//! Workspaces are the top-level tenant: users join them via invite codes and
//! channels live inside them. Membership is append-only and at-most-once per
//! user; nothing in the current design removes a member.
//!
//! # Module Structure
//!
//! ```text
//! workspace/
//! ├── mod.rs      - Module exports and documentation
//! ├── store.rs    - Workspace model and directory (invite-code index)
//! ├── db.rs       - Database mirror
//! └── handlers/   - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── manage.rs
//!     └── join.rs
//! ```
//!
//! # Membership Rules
//!
//! - Creator becomes the sole `Admin` member at creation
//! - Joiners arrive through the invite code and get role `Member`
//! - The join path is one atomic check-and-append; concurrent joins by the
//!   same user produce exactly one entry
//! - Roles are advisory: nothing gates on them yet

pub mod db;
pub mod handlers;
pub mod store;

pub use handlers::{
    create_workspace, get_workspace, join_workspace, list_workspace_channels, list_workspaces,
};
pub use store::{InviteJoin, Member, Role, Workspace, WorkspaceDirectory};
