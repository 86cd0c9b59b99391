//! Workspace Handlers Module
//!
//! HTTP handlers for the workspace endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Module exports
//! ├── types.rs   - Request types
//! ├── manage.rs  - Create / list / fetch workspaces and their channels
//! └── join.rs    - Invite-code join
//! ```

pub mod join;
pub mod manage;
pub mod types;

pub use join::join_workspace;
pub use manage::{create_workspace, get_workspace, list_workspace_channels, list_workspaces};
pub use types::{CreateWorkspaceRequest, JoinWorkspaceRequest};
