//! Realtime integration tests
//!
//! Fan-out and presence through the hub, with messages entering through
//! the same ingest pipeline the HTTP API uses.

mod fanout_test;
mod presence_test;
