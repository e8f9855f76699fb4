//! Document error types.

use atrio_shared::AppError;
use thiserror::Error;

/// Document export errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Budgets without items cannot be exported.
    #[error("Add at least one item before exporting the budget")]
    NoItems,

    /// The budget belongs to another company.
    #[error("Budget does not belong to the issuing company")]
    CompanyMismatch,

    /// Writing the document failed.
    #[error("Failed to render document: {0}")]
    Render(String),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NoItems => Self::Validation(err.to_string()),
            DocumentError::CompanyMismatch => Self::Forbidden(err.to_string()),
            DocumentError::Render(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<std::fmt::Error> for DocumentError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
