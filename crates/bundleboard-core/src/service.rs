//! Bundle service: the read-transform and load-mutate-save pipelines.
//!
//! Generic over the store to maintain the clean architecture boundary --
//! no infrastructure dependencies in core.

use tokio::sync::Mutex;

use bundleboard_types::bundle::{BundleView, Document, PromptIndex};
use bundleboard_types::error::{BundleError, StoreError};

use crate::store::BundleStore;

/// Service exposing the two bundle operations.
///
/// Holds no document state between calls: every operation loads the document
/// fresh and either discards it (reads) or saves it back in full (writes).
/// The write path runs under a single-writer lock so two concurrent updates
/// cannot interleave their load/save cycles and lose one of the writes.
pub struct BundleService<S: BundleStore> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: BundleStore> BundleService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Load the document and reshape it into the client-facing schema.
    ///
    /// Pure read: each recipe's `recipe_name` becomes `name`, prompts pass
    /// through unchanged.
    pub async fn list_bundles(&self) -> Result<Vec<BundleView>, BundleError> {
        let document = self.load(BundleError::DataNotFound).await?;
        Ok(document.bundles.iter().map(BundleView::from).collect())
    }

    /// Overwrite one prompt's score and notes in place and persist the
    /// whole document.
    ///
    /// A missing data file and an out-of-range index both surface as
    /// [`BundleError::PromptNotFound`]; a prompt id that is not three
    /// hyphen-separated integers fails before any lookup.
    pub async fn update_prompt(
        &self,
        prompt_id: &str,
        score: i64,
        notes: &str,
    ) -> Result<(), BundleError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load(BundleError::PromptNotFound).await?;
        let index: PromptIndex = prompt_id.parse()?;

        let prompt = document
            .prompt_mut(&index)
            .ok_or(BundleError::PromptNotFound)?;
        prompt.score = score;
        prompt.notes = notes.to_string();

        self.store
            .save(&document)
            .await
            .map_err(|e| BundleError::Storage(e.to_string()))?;

        tracing::debug!(%index, score, "prompt updated");
        Ok(())
    }

    /// Load the document, mapping a missing store to the caller's
    /// not-found variant (the read and write paths report it differently).
    async fn load(&self, missing: BundleError) -> Result<Document, BundleError> {
        self.store.load().await.map_err(|e| match e {
            StoreError::NotFound => missing,
            StoreError::Malformed(_) => BundleError::Malformed,
            StoreError::Io(e) => BundleError::Storage(e.to_string()),
        })
    }
}
