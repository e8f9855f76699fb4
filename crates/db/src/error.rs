//! Store error types.

use atrio_shared::AppError;
use thiserror::Error;

/// Errors raised by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with that key in the caller's scope.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name.
        entity: &'static str,
        /// Key that was looked up.
        id: String,
    },

    /// Email already registered.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Snapshot file could not be read or written.
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid JSON for this version.
    #[error("Snapshot is malformed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot was written by an incompatible version.
    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
}

impl StoreError {
    /// Builds a not-found error.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::DuplicateEmail(_) => Self::Conflict(err.to_string()),
            other => Self::Storage(other.to_string()),
        }
    }
}
