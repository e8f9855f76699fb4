//! Expense error types.

use atrio_shared::AppError;
use atrio_shared::types::ExpenseId;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::plan::PlanError;

/// Expense-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    /// Expense not found in the budget.
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// Quantity cannot be negative.
    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    /// Unit cost cannot be negative.
    #[error("Unit cost cannot be negative")]
    NegativePrice,

    /// Quantity above the accepted maximum.
    #[error("Quantity cannot exceed {0}")]
    QuantityTooLarge(Decimal),

    /// Unit cost above the accepted maximum.
    #[error("Unit cost cannot exceed {0}")]
    PriceTooLarge(Decimal),

    /// The plan does not allow another expense.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => Self::NotFound(err.to_string()),
            ExpenseError::Plan(e) => e.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}
