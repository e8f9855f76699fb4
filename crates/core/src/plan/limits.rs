//! Per-plan resource limits.

use atrio_shared::config::PlanConfig;
use serde::Serialize;

use super::error::PlanError;
use super::types::{Feature, PlanType, Resource};

/// Result of checking a resource count against the plan cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitCheck {
    /// Whether one more entry may be added.
    pub allowed: bool,
    /// Current number of entries.
    pub current: usize,
    /// The cap, or `None` when unlimited.
    pub limit: Option<usize>,
    /// Message shown when the cap is reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Resource caps of the Free plan. Premium is never capped.
#[derive(Debug, Clone, Copy)]
pub struct PlanLimits {
    config: PlanConfig,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}

impl PlanLimits {
    /// Creates limits from configuration.
    #[must_use]
    pub const fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Length of a Premium subscription period in days.
    #[must_use]
    pub const fn premium_period_days(&self) -> i64 {
        self.config.premium_period_days
    }

    /// Returns the cap for a resource on a plan.
    #[must_use]
    pub const fn max_for(&self, plan: PlanType, resource: Resource) -> Option<usize> {
        match plan {
            PlanType::Premium => None,
            PlanType::Free => Some(match resource {
                Resource::BudgetItems => self.config.free_max_items,
                Resource::Payments => self.config.free_max_payments,
                Resource::Expenses => self.config.free_max_expenses,
                Resource::Specialties => self.config.free_max_specialties,
            }),
        }
    }

    /// Checks whether one more entry may be added given `current` entries.
    #[must_use]
    pub fn check(&self, plan: PlanType, resource: Resource, current: usize) -> LimitCheck {
        let limit = self.max_for(plan, resource);
        let allowed = limit.is_none_or(|max| current < max);
        let message = (!allowed).then(|| {
            PlanError::LimitReached {
                resource,
                limit: limit.unwrap_or_default(),
            }
            .to_string()
        });

        LimitCheck {
            allowed,
            current,
            limit,
            message,
        }
    }

    /// Fails when one more entry would exceed the cap.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::LimitReached` when the cap is reached.
    pub fn ensure_can_add(
        &self,
        plan: PlanType,
        resource: Resource,
        current: usize,
    ) -> Result<(), PlanError> {
        self.ensure_within(plan, resource, current.saturating_add(1))
    }

    /// Fails when `total` entries exceed the cap.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::LimitReached` when `total` is above the cap.
    pub fn ensure_within(
        &self,
        plan: PlanType,
        resource: Resource,
        total: usize,
    ) -> Result<(), PlanError> {
        match self.max_for(plan, resource) {
            Some(limit) if total > limit => Err(PlanError::LimitReached { resource, limit }),
            _ => Ok(()),
        }
    }

    /// Returns true if the plan includes the feature.
    #[must_use]
    pub const fn has_feature(plan: PlanType, feature: Feature) -> bool {
        match feature {
            Feature::Analytics => matches!(plan, PlanType::Premium),
        }
    }

    /// Fails when the plan does not include the feature.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FeatureUnavailable` for Premium-only features on Free.
    pub fn ensure_feature(plan: PlanType, feature: Feature) -> Result<(), PlanError> {
        if Self::has_feature(plan, feature) {
            Ok(())
        } else {
            Err(PlanError::FeatureUnavailable(feature))
        }
    }
}
