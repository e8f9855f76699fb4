//! Plan gating errors.

use atrio_shared::AppError;
use thiserror::Error;

use super::types::{Feature, Resource};

/// Errors raised when an operation exceeds the company's plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A Free plan resource cap was reached.
    #[error("Free plan allows at most {limit} {}; upgrade to Premium", resource.label())]
    LimitReached {
        /// The capped resource.
        resource: Resource,
        /// The cap.
        limit: usize,
    },

    /// The feature is Premium-only.
    #[error("{} is available on the Premium plan only", .0.label())]
    FeatureUnavailable(Feature),
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        Self::UpgradeRequired(err.to_string())
    }
}
