//! API integration tests
//!
//! End-to-end coverage of the HTTP endpoints against the real router.

mod auth_test;
mod channel_test;
mod server_test;
