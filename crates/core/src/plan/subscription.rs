//! Subscription period handling.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::limits::PlanLimits;
use super::types::PlanType;
use crate::company::Company;

/// Number of days before expiry at which a renewal notice is shown.
pub const RENEWAL_NOTICE_DAYS: i64 = 3;

/// Subscription state of a company as seen on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionStatus {
    /// Stored plan.
    pub plan: PlanType,
    /// Plan after applying expiry.
    pub effective_plan: PlanType,
    /// Last day of the Premium period.
    pub expires_on: Option<NaiveDate>,
    /// Days left until expiry (negative once expired).
    pub days_remaining: Option<i64>,
    /// True when a stored Premium plan has lapsed.
    pub is_expired: bool,
}

/// Subscription operations.
pub struct SubscriptionService;

impl SubscriptionService {
    /// Returns the plan in force on `today`.
    ///
    /// A Premium plan whose expiry date is before `today` counts as Free.
    #[must_use]
    pub fn effective_plan(company: &Company, today: NaiveDate) -> PlanType {
        match (company.plan, company.subscription_expires_on) {
            (PlanType::Premium, Some(expires_on)) if expires_on < today => PlanType::Free,
            (plan, _) => plan,
        }
    }

    /// Describes the subscription on `today`.
    #[must_use]
    pub fn status(company: &Company, today: NaiveDate) -> SubscriptionStatus {
        let effective_plan = Self::effective_plan(company, today);
        let days_remaining = match company.plan {
            PlanType::Premium => company
                .subscription_expires_on
                .map(|expires_on| (expires_on - today).num_days()),
            PlanType::Free => None,
        };

        SubscriptionStatus {
            plan: company.plan,
            effective_plan,
            expires_on: company.subscription_expires_on,
            days_remaining,
            is_expired: company.plan == PlanType::Premium && effective_plan == PlanType::Free,
        }
    }

    /// Returns the days left when a Premium period ends within the notice window.
    #[must_use]
    pub fn renewal_due_in(company: &Company, today: NaiveDate) -> Option<i64> {
        Self::status(company, today)
            .days_remaining
            .filter(|days| (0..=RENEWAL_NOTICE_DAYS).contains(days))
    }

    /// Activates Premium for one period starting `today`.
    pub fn upgrade(company: &mut Company, limits: &PlanLimits, today: NaiveDate) {
        let period = u64::try_from(limits.premium_period_days()).unwrap_or_default();
        company.plan = PlanType::Premium;
        company.subscription_expires_on = today.checked_add_days(Days::new(period));
    }

    /// Returns the company to the Free plan.
    pub fn downgrade(company: &mut Company) {
        company.plan = PlanType::Free;
        company.subscription_expires_on = None;
    }
}
