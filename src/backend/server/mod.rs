//! Server Module
//!
//! Initialization and configuration of the axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState, the shared state container
//! ├── config.rs       - Environment configuration (database, port)
//! └── init.rs         - Startup: restore from database, build router
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: reads `DATABASE_URL` and `SERVER_PORT`
//! 2. **State Creation**: builds the in-memory directories and realtime hub
//! 3. **Restoration**: reloads users, workspaces, channels, and messages
//!    from the database when one is configured
//! 4. **Router Creation**: assembles routes, auth middleware, and CORS
//! 5. **Background Tasks**: spawns the empty-room sweep

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
