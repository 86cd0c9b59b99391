//! Backend Error Module
//!
//! The single error taxonomy used by every handler and by the message
//! ingest pipeline, with its HTTP response conversion.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and status mapping
//! └── conversion.rs - IntoResponse and From impls
//! ```
//!
//! Handlers return `Result<_, ApiError>`; conversion produces a JSON body
//! `{"error": "...", "status": NNN}` with the mapped status code. Internal
//! errors log their detail and send a generic body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
