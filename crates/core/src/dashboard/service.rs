//! Dashboard aggregation.

use rust_decimal::Decimal;

use super::types::{BudgetOverview, DashboardSummary, StatusCounts};
use crate::budget::{Budget, BudgetStatus};

/// Number of budgets listed as recent activity.
pub const RECENT_LIMIT: usize = 5;

/// Dashboard service.
pub struct DashboardService;

impl DashboardService {
    /// Aggregates the budgets of one company.
    #[must_use]
    pub fn build(budgets: &[Budget]) -> DashboardSummary {
        let mut total_paid = Decimal::ZERO;
        let mut total_approved = Decimal::ZERO;
        let mut total_pending = Decimal::ZERO;
        let mut counts = StatusCounts::default();

        for budget in budgets {
            let totals = budget.totals();
            total_paid = total_paid.saturating_add(totals.paid);
            match budget.status {
                BudgetStatus::Approved => {
                    total_approved = total_approved.saturating_add(totals.total);
                    counts.approved += 1;
                }
                BudgetStatus::Draft => {
                    total_pending = total_pending.saturating_add(totals.total);
                    counts.draft += 1;
                }
                BudgetStatus::Rejected => counts.rejected += 1,
            }
        }

        let mut newest: Vec<&Budget> = budgets.iter().collect();
        newest.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        let recent = newest
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|b| {
                let totals = b.totals();
                BudgetOverview {
                    id: b.id,
                    number: b.number.clone(),
                    client_name: b.client.name.clone(),
                    status: b.status,
                    date: b.date,
                    total: totals.total,
                    paid: totals.paid,
                }
            })
            .collect();

        DashboardSummary {
            total_paid,
            total_approved,
            total_pending,
            balance: total_approved.saturating_sub(total_paid),
            counts,
            budget_count: budgets.len(),
            recent,
        }
    }
}
