//! BundleStore trait for abstracting document persistence.
//!
//! Defined in bundleboard-core so the service can load and save the document
//! without depending on any specific storage backend. The `JsonFileStore`
//! adapter lives in bundleboard-infra.

use bundleboard_types::bundle::Document;
use bundleboard_types::error::StoreError;

/// Abstraction over durable load/save of the whole bundle document.
///
/// This trait allows the service layer to persist the document without
/// coupling to the real filesystem, enabling easy testing with in-memory
/// implementations. There is no partial or streaming access: every load
/// reads the full document, every save rewrites it in full.
pub trait BundleStore: Send + Sync {
    /// Load and parse the persisted document.
    ///
    /// Fails with [`StoreError::NotFound`] if the underlying resource is
    /// absent and [`StoreError::Malformed`] if its content does not parse.
    fn load(&self) -> impl std::future::Future<Output = Result<Document, StoreError>> + Send;

    /// Serialize the document and overwrite the persisted resource in full.
    fn save(
        &self,
        document: &Document,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
