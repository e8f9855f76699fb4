//! Budget error types.

use atrio_shared::AppError;
use atrio_shared::types::{BudgetId, BudgetItemId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::plan::PlanError;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Budget not found in the caller's company.
    #[error("Budget not found: {0}")]
    NotFound(BudgetId),

    /// Line item not found in the budget.
    #[error("Budget item not found: {0}")]
    ItemNotFound(BudgetItemId),

    /// The client name is empty.
    #[error("Client name is required")]
    MissingClientName,

    /// Quantity cannot be negative.
    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    /// Unit price cannot be negative.
    #[error("Unit price cannot be negative")]
    NegativePrice,

    /// Quantity above the accepted maximum.
    #[error("Quantity cannot exceed {0}")]
    QuantityTooLarge(Decimal),

    /// Unit price above the accepted maximum.
    #[error("Unit price cannot exceed {0}")]
    PriceTooLarge(Decimal),

    /// Tax rate outside 0..=100.
    #[error("Tax rate must be between 0 and 100, got {0}")]
    InvalidTaxRate(Decimal),

    /// Validity date before the issue date.
    #[error("Validity date cannot be before the issue date")]
    ValidityBeforeIssue,

    /// The plan does not allow the change.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::NotFound(_) | BudgetError::ItemNotFound(_) => Self::NotFound(err.to_string()),
            BudgetError::Plan(e) => e.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}
