//! Budget arithmetic.
//!
//! - `subtotal = Σ quantity × price_per_unit`
//! - `tax = subtotal × tax_rate / 100` when VAT is enabled, else zero
//! - `total = subtotal + tax`
//!
//! Values are exact; rounding is left to presentation. Inputs are bounded by
//! [`MAX_QUANTITY`](super::types::MAX_QUANTITY) and
//! [`MAX_AMOUNT`](super::types::MAX_AMOUNT), and every operation here
//! saturates instead of panicking, so a stored budget can always be read.

use rust_decimal::Decimal;
use serde::Serialize;

use super::types::{Budget, BudgetItem};

/// Amount of one line.
#[must_use]
pub fn line_total(quantity: Decimal, price_per_unit: Decimal) -> Decimal {
    quantity.saturating_mul(price_per_unit)
}

/// Sum of amounts, saturating at the decimal range.
#[must_use]
pub fn sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `part` as a percentage of `whole`, to two decimal places.
///
/// Zero when `whole` is not positive. A ratio too large for `Decimal`
/// saturates.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() { Decimal::MIN } else { Decimal::MAX })
        .round_dp(2)
}

/// Tax due on a subtotal.
#[must_use]
pub fn tax_amount(subtotal: Decimal, tax_rate: Decimal, is_vat_enabled: bool) -> Decimal {
    if is_vat_enabled {
        subtotal.saturating_mul(tax_rate) / Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

/// Sum of the line totals of the items.
#[must_use]
pub fn items_subtotal(items: &[BudgetItem]) -> Decimal {
    sum(items.iter().map(|item| line_total(item.quantity, item.price_per_unit)))
}

/// Money figures of one budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetTotals {
    /// Sum of line totals.
    pub subtotal: Decimal,
    /// Tax amount.
    pub tax: Decimal,
    /// Subtotal plus tax.
    pub total: Decimal,
    /// Sum of expense line totals.
    pub costs: Decimal,
    /// Sum of payments.
    pub paid: Decimal,
    /// Total minus paid.
    pub balance: Decimal,
}

impl BudgetTotals {
    /// Computes the figures of a budget.
    #[must_use]
    pub fn of(budget: &Budget) -> Self {
        let subtotal = items_subtotal(&budget.items);
        let tax = tax_amount(subtotal, budget.tax_rate, budget.is_vat_enabled);
        let total = subtotal.saturating_add(tax);
        let costs = sum(budget.expenses.iter().map(|e| line_total(e.quantity, e.price_per_unit)));
        let paid = sum(budget.payments.iter().map(|p| p.amount));

        Self {
            subtotal,
            tax,
            total,
            costs,
            paid,
            balance: total.saturating_sub(paid),
        }
    }
}

impl Budget {
    /// Computes the money figures of the budget.
    #[must_use]
    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::of(self)
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let subtotal = items_subtotal(&self.items);
        subtotal.saturating_add(tax_amount(subtotal, self.tax_rate, self.is_vat_enabled))
    }
}
