//! Test helpers shared across crates.
//!
//! This crate builds stack documents from `serde_json::json!` literals so
//! integration tests can describe base and override layers the way users
//! write them.

pub mod fixtures;
