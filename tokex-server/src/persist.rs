//! Record persistence: slug derivation and the two-location write.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Store directory name under the user's home directory.
const STORE_DIR_NAME: &str = ".design-systems";

/// Slug used when a record carries no usable file name.
const FALLBACK_SLUG: &str = "untitled";

/// Errors raised while persisting a record.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Filesystem write failed.
    #[error("failed to write record: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Default store directory: `~/.design-systems`, falling back to the
/// working directory when no home directory can be resolved.
#[must_use]
pub fn default_store_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_DIR_NAME)
}

/// Derive a file slug from a design file name.
///
/// Lowercases, collapses every run of non-alphanumeric characters to a
/// single `-`, and trims leading and trailing dashes.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Write one record to the store directory and the fixed output path.
///
/// The store file is named after the record's `fileName` field; records
/// without one fall back to `untitled`. Both copies are pretty-printed
/// with 2-space indentation. Returns the store path.
///
/// # Errors
///
/// Returns [`PersistError`] if serialization or either write fails.
pub async fn persist_record(
    store_dir: &Path,
    output_path: &Path,
    record: &serde_json::Value,
) -> Result<PathBuf, PersistError> {
    let name = record
        .get("fileName")
        .and_then(serde_json::Value::as_str)
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| FALLBACK_SLUG.to_string());

    let pretty = serde_json::to_string_pretty(record)?;

    tokio::fs::create_dir_all(store_dir).await?;
    let store_path = store_dir.join(format!("{name}.json"));
    tokio::fs::write(&store_path, &pretty).await?;
    tokio::fs::write(output_path, &pretty).await?;

    tracing::info!(path = %store_path.display(), "record persisted");
    Ok(store_path)
}
