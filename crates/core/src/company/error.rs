//! Company profile errors.

use atrio_shared::AppError;
use thiserror::Error;

use crate::plan::PlanError;

/// Errors raised when editing a company profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyError {
    /// The company name is empty.
    #[error("company name is required")]
    EmptyName,

    /// The contact email is not plausible.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The logo is not an image data URL.
    #[error("logo must be an image data URL")]
    InvalidLogo,

    /// The plan does not allow the change.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<CompanyError> for AppError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::Plan(e) => e.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}
