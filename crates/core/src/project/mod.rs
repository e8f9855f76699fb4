//! Per-budget project profitability.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::Budget;
use crate::budget::totals::percent_of;
use atrio_shared::types::round_money;

/// One bar of the project chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Series label.
    pub label: &'static str,
    /// Value rounded to two decimal places.
    pub value: Decimal,
}

/// Profitability figures of one budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// Budget total.
    pub revenue: Decimal,
    /// Sum of expenses.
    pub costs: Decimal,
    /// Sum of payments.
    pub paid: Decimal,
    /// Revenue minus costs.
    pub profit: Decimal,
    /// Profit over revenue in percent.
    pub margin_percent: Decimal,
    /// Revenue minus paid.
    pub balance: Decimal,
    /// Paid over revenue in percent. Not capped, so overpayment shows above 100.
    pub payment_percent: Decimal,
    /// Revenue, expenses and profit bars.
    pub chart: Vec<ChartPoint>,
}

impl ProjectSummary {
    /// Computes the summary of a budget.
    #[must_use]
    pub fn for_budget(budget: &Budget) -> Self {
        let totals = budget.totals();
        let revenue = totals.total;
        let profit = revenue.saturating_sub(totals.costs);

        Self {
            revenue,
            costs: totals.costs,
            paid: totals.paid,
            profit,
            margin_percent: percent_of(profit, revenue),
            balance: revenue.saturating_sub(totals.paid),
            payment_percent: percent_of(totals.paid, revenue),
            chart: vec![
                ChartPoint {
                    label: "revenue",
                    value: round_money(revenue),
                },
                ChartPoint {
                    label: "expenses",
                    value: round_money(totals.costs),
                },
                ChartPoint {
                    label: "profit",
                    value: round_money(profit),
                },
            ],
        }
    }
}
