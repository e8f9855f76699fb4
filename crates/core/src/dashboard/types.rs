//! Dashboard data types.

use atrio_shared::types::BudgetId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::BudgetStatus;

/// Dashboard response.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Payments received across all budgets.
    pub total_paid: Decimal,
    /// Value of Approved budgets.
    pub total_approved: Decimal,
    /// Value of Draft budgets.
    pub total_pending: Decimal,
    /// Approved value not yet paid.
    pub balance: Decimal,
    /// Number of budgets per status.
    pub counts: StatusCounts,
    /// Total number of budgets.
    pub budget_count: usize,
    /// Most recent budgets, newest first.
    pub recent: Vec<BudgetOverview>,
}

/// Number of budgets per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    /// Draft budgets.
    pub draft: usize,
    /// Approved budgets.
    pub approved: usize,
    /// Rejected budgets.
    pub rejected: usize,
}

impl StatusCounts {
    /// Count for one status.
    #[must_use]
    pub const fn get(&self, status: BudgetStatus) -> usize {
        match status {
            BudgetStatus::Draft => self.draft,
            BudgetStatus::Approved => self.approved,
            BudgetStatus::Rejected => self.rejected,
        }
    }
}

/// Condensed budget row.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverview {
    /// Budget ID.
    pub id: BudgetId,
    /// Reference number.
    pub number: String,
    /// Client name.
    pub client_name: String,
    /// Status.
    pub status: BudgetStatus,
    /// Issue timestamp.
    pub date: DateTime<Utc>,
    /// Budget total.
    pub total: Decimal,
    /// Sum of payments.
    pub paid: Decimal,
}
