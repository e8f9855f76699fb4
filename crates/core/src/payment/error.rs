//! Payment error types.

use atrio_shared::AppError;
use atrio_shared::types::PaymentId;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::plan::PlanError;

/// Payment-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Amount must be greater than zero.
    #[error("Payment amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount above the accepted maximum.
    #[error("Payment amount cannot exceed {0}")]
    AmountTooLarge(Decimal),

    /// Proof attachment is not a data URL.
    #[error("Payment proof must be a data URL")]
    InvalidProof,

    /// Payment not found in the budget.
    #[error("Payment not found: {0}")]
    NotFound(PaymentId),

    /// The plan does not allow another payment.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NotFound(_) => Self::NotFound(err.to_string()),
            PaymentError::Plan(e) => e.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}
