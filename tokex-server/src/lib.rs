//! # Tokex Server Library
//!
//! Shared types and functionality for the token receiver.
//! This library is used by both the binary and integration tests.

use std::path::PathBuf;

pub mod persist;
pub mod routes;

pub use persist::{default_store_dir, slugify, PersistError};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory holding one JSON file per extracted design file.
    pub store_dir: PathBuf,
    /// Fixed path of the latest-record copy.
    pub output_path: PathBuf,
}

impl AppState {
    /// Create state with explicit paths.
    #[must_use]
    pub fn new(store_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            store_dir,
            output_path,
        }
    }

    /// Create state with the default store under the home directory and
    /// `design-system.json` in the working directory.
    #[must_use]
    pub fn with_default_paths() -> Self {
        Self::new(default_store_dir(), PathBuf::from("design-system.json"))
    }
}
