//! JSON file adapter for the `BundleStore` trait.
//!
//! The whole document lives in a single JSON file. Loads read and parse the
//! full file; saves rewrite it in full through a sibling temp file and an
//! atomic rename, so a crashed write never leaves a half-written document.

use std::path::{Path, PathBuf};

use bundleboard_core::store::BundleStore;
use bundleboard_types::bundle::Document;
use bundleboard_types::error::StoreError;

/// File name of the bundles document inside the data directory.
pub const DATA_FILE_NAME: &str = "bundles.json";

/// `BundleStore` implementation backed by a single JSON file.
///
/// All operations go through `tokio::fs` for async I/O.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BundleStore for JsonFileStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound);
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        serde_json::from_str(&content).map_err(|err| StoreError::Malformed(err.to_string()))
    }

    async fn save(&self, document: &Document) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to a sibling temp file, then rename into place.
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &content).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `BUNDLEBOARD_DATA_DIR` environment variable
/// 2. Platform home directory (`~/.bundleboard`)
/// 3. Current directory fallback
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BUNDLEBOARD_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".bundleboard");
    }

    PathBuf::from(".bundleboard")
}

/// Compute the bundles data file path: `{data_dir}/bundles.json`.
pub fn data_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DATA_FILE_NAME)
}
