//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Test server fixtures (router over in-memory state)
//! - Authentication helpers that go through the real signup endpoint
//! - Custom assertion macros

pub mod fixtures;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use fixtures::*;
