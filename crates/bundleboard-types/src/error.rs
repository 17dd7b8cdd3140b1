use thiserror::Error;

/// Errors from store load/save operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bundles data file not found")]
    NotFound,

    #[error("error parsing bundles data: {0}")]
    Malformed(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error from parsing a composite prompt index string.
#[derive(Debug, Error)]
pub enum PromptIndexError {
    #[error("invalid prompt id '{0}': expected three hyphen-separated integers")]
    InvalidFormat(String),
}

/// Errors surfaced by the bundle service.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The data file is absent on the read path.
    #[error("bundles data file not found")]
    DataNotFound,

    /// The composite index does not resolve to a prompt, or the data file
    /// is absent on the update path.
    #[error("prompt not found")]
    PromptNotFound,

    #[error(transparent)]
    InvalidPromptId(#[from] PromptIndexError),

    #[error("error parsing bundles data")]
    Malformed,

    #[error("storage error: {0}")]
    Storage(String),
}
