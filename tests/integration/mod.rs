//! Integration tests
//!
//! - `api` - every HTTP endpoint over the real router
//! - `realtime` - fan-out and presence through the hub

mod api;
mod realtime;
