//! Application state wiring the service to its storage backend.
//!
//! The service is generic over the store trait, but AppState pins it to the
//! concrete JSON file adapter from bundleboard-infra.

use std::path::PathBuf;
use std::sync::Arc;

use bundleboard_core::service::BundleService;
use bundleboard_infra::storage::JsonFileStore;

/// Concrete type alias pinning the service generic to the file store.
pub type ConcreteBundleService = BundleService<JsonFileStore>;

/// Shared application state used by both CLI commands and REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub bundle_service: Arc<ConcreteBundleService>,
    pub data_file: PathBuf,
}

impl AppState {
    /// Initialize the application state around the given data file.
    ///
    /// Ensures the data directory exists. The file itself may be absent;
    /// operations against a missing file report not-found.
    pub async fn init(data_file: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = data_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let store = JsonFileStore::new(&data_file);
        Ok(Self {
            bundle_service: Arc::new(BundleService::new(store)),
            data_file,
        })
    }
}
