//! Property-based tests
//!
//! - `invite_code_proptest` - invite codes stay canonical and unique
//! - `ordering_proptest` - history ordering is total and stable

mod invite_code_proptest;
