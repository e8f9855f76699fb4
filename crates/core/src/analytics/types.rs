//! Analytics data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetStatus;
use crate::company::Specialty;

/// Analytics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Budget count per status; statuses without budgets are omitted.
    pub status_breakdown: Vec<StatusSlice>,
    /// Pre-tax approved revenue per specialty, highest first.
    pub revenue_by_specialty: Vec<SpecialtyRevenue>,
    /// Approved revenue and costs per issue month, oldest first.
    pub monthly_trend: Vec<MonthlyPoint>,
    /// Value of Approved budgets.
    pub total_approved_revenue: Decimal,
    /// Expenses of Approved budgets.
    pub total_approved_costs: Decimal,
    /// Approved revenue minus approved costs.
    pub net_profit: Decimal,
    /// Approved budgets over all budgets in percent.
    pub conversion_rate: Decimal,
    /// True when served from cache.
    #[serde(default)]
    pub cached: bool,
}

/// One slice of the status chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlice {
    /// Status.
    pub status: BudgetStatus,
    /// Number of budgets.
    pub count: usize,
}

/// One bar of the specialty chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyRevenue {
    /// Specialty.
    pub specialty: Specialty,
    /// Display label.
    pub label: String,
    /// Pre-tax revenue, rounded to two decimal places.
    pub revenue: Decimal,
}

/// One point of the monthly trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Label in `M/YYYY` form.
    pub label: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Approved value issued in the month, rounded to two decimal places.
    pub revenue: Decimal,
    /// Expenses of those budgets, rounded to two decimal places.
    pub costs: Decimal,
}
