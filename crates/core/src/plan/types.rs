//! Plan data types.

use serde::{Deserialize, Serialize};

/// Subscription tier of a company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    /// Limited tier.
    #[default]
    Free,
    /// Paid tier without limits.
    Premium,
}

impl PlanType {
    /// Returns the string representation of the plan.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Countable resources that are capped on the Free plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Line items in one budget.
    BudgetItems,
    /// Payment records in one budget.
    Payments,
    /// Expense records in one budget.
    Expenses,
    /// Trade specialties of the company.
    Specialties,
}

impl Resource {
    /// Human-readable name used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BudgetItems => "budget items",
            Self::Payments => "payments per budget",
            Self::Expenses => "expenses per budget",
            Self::Specialties => "specialties",
        }
    }
}

/// Features that are not available on every plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Company-wide analytics charts.
    Analytics,
}

impl Feature {
    /// Human-readable name used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Analytics => "analytics",
        }
    }
}
