//! Free/Premium plan gating.
//!
//! This module provides:
//! - Plan types and per-plan resource limits
//! - Feature checks for Premium-only functionality
//! - Subscription period handling (upgrade, downgrade, expiry)

pub mod error;
pub mod limits;
pub mod subscription;
pub mod types;

pub use error::PlanError;
pub use limits::{LimitCheck, PlanLimits};
pub use subscription::{SubscriptionService, SubscriptionStatus};
pub use types::{Feature, PlanType, Resource};
