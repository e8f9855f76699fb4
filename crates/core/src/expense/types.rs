//! Expense data types.

use atrio_shared::types::ExpenseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::plan::LimitCheck;

/// A cost incurred on the job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    /// Expense ID.
    pub id: ExpenseId,
    /// What was bought or paid for.
    pub description: String,
    /// Unit of measure.
    pub unit: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Cost per unit.
    pub price_per_unit: Decimal,
}

/// Expense fields supplied by the caller. Omitted fields take defaults on
/// creation and stay unchanged on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseInput {
    /// What was bought or paid for.
    pub description: Option<String>,
    /// Unit of measure; defaults to `un`.
    pub unit: Option<String>,
    /// Quantity; defaults to 1.
    pub quantity: Option<Decimal>,
    /// Cost per unit; defaults to 0.
    pub price_per_unit: Option<Decimal>,
}

/// Profitability of one budget.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSummary {
    /// Budget total.
    pub revenue: Decimal,
    /// Sum of expense line totals.
    pub costs: Decimal,
    /// Revenue minus costs.
    pub profit: Decimal,
    /// Expenses in entry order.
    pub expenses: Vec<ExpenseItem>,
    /// Whether another expense may be recorded.
    pub limit: LimitCheck,
}
