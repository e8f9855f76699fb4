//! Expense service.

use atrio_shared::types::ExpenseId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::error::ExpenseError;
use super::types::{ExpenseInput, ExpenseItem, ExpenseSummary};
use crate::budget::Budget;
use crate::budget::types::{MAX_AMOUNT, MAX_QUANTITY, normalize_unit};
use crate::company::Company;
use crate::plan::{PlanLimits, Resource, SubscriptionService};

/// Expense service for business logic.
pub struct ExpenseService;

impl ExpenseService {
    /// Adds an expense with defaults for omitted fields.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::Plan` when the plan's expense cap is reached,
    /// or a validation error for negative quantity or cost.
    pub fn add(
        budget: &mut Budget,
        company: &Company,
        input: ExpenseInput,
        limits: &PlanLimits,
        now: DateTime<Utc>,
    ) -> Result<ExpenseItem, ExpenseError> {
        validate(&input)?;
        let plan = SubscriptionService::effective_plan(company, now.date_naive());
        limits.ensure_can_add(plan, Resource::Expenses, budget.expenses.len())?;

        let expense = ExpenseItem {
            id: ExpenseId::new(),
            description: input.description.map(|d| d.trim().to_string()).unwrap_or_default(),
            unit: normalize_unit(input.unit),
            quantity: input.quantity.unwrap_or(Decimal::ONE),
            price_per_unit: input.price_per_unit.unwrap_or(Decimal::ZERO),
        };
        budget.expenses.push(expense.clone());
        budget.updated_at = now;
        Ok(expense)
    }

    /// Applies a partial update to an expense.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` for an unknown expense, or a
    /// validation error for negative quantity or cost.
    pub fn update(
        budget: &mut Budget,
        expense_id: ExpenseId,
        input: ExpenseInput,
        now: DateTime<Utc>,
    ) -> Result<ExpenseItem, ExpenseError> {
        validate(&input)?;
        let expense = budget
            .expenses
            .iter_mut()
            .find(|e| e.id == expense_id)
            .ok_or(ExpenseError::NotFound(expense_id))?;

        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }
        if input.unit.is_some() {
            expense.unit = normalize_unit(input.unit);
        }
        if let Some(quantity) = input.quantity {
            expense.quantity = quantity;
        }
        if let Some(price) = input.price_per_unit {
            expense.price_per_unit = price;
        }

        let expense = expense.clone();
        budget.updated_at = now;
        Ok(expense)
    }

    /// Removes an expense and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::NotFound` for an unknown expense.
    pub fn remove(
        budget: &mut Budget,
        expense_id: ExpenseId,
        now: DateTime<Utc>,
    ) -> Result<ExpenseItem, ExpenseError> {
        let pos = budget
            .expenses
            .iter()
            .position(|e| e.id == expense_id)
            .ok_or(ExpenseError::NotFound(expense_id))?;

        budget.updated_at = now;
        Ok(budget.expenses.remove(pos))
    }

    /// Summarizes revenue against job costs.
    #[must_use]
    pub fn summary(
        budget: &Budget,
        company: &Company,
        limits: &PlanLimits,
        today: NaiveDate,
    ) -> ExpenseSummary {
        let totals = budget.totals();
        let plan = SubscriptionService::effective_plan(company, today);

        ExpenseSummary {
            revenue: totals.total,
            costs: totals.costs,
            profit: totals.total.saturating_sub(totals.costs),
            expenses: budget.expenses.clone(),
            limit: limits.check(plan, Resource::Expenses, budget.expenses.len()),
        }
    }
}

fn validate(input: &ExpenseInput) -> Result<(), ExpenseError> {
    if let Some(quantity) = input.quantity {
        if quantity < Decimal::ZERO {
            return Err(ExpenseError::NegativeQuantity);
        }
        if quantity > MAX_QUANTITY {
            return Err(ExpenseError::QuantityTooLarge(MAX_QUANTITY));
        }
    }
    if let Some(price) = input.price_per_unit {
        if price < Decimal::ZERO {
            return Err(ExpenseError::NegativePrice);
        }
        if price > MAX_AMOUNT {
            return Err(ExpenseError::PriceTooLarge(MAX_AMOUNT));
        }
    }
    Ok(())
}
