use thiserror::Error;

/// Failures of a key-value backend. Callers in the theme layer swallow these.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("content store needs at least one profile")]
    Empty,

    #[error("duplicate profile name: {0}")]
    DuplicateName(String),
}
