//! Shared integration test support.

pub mod server;
