//! Payment service.

use atrio_shared::types::PaymentId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::error::PaymentError;
use super::types::{PaymentInput, PaymentRecord, PaymentSummary};
use crate::budget::Budget;
use crate::budget::totals::percent_of;
use crate::budget::types::MAX_AMOUNT;
use crate::company::Company;
use crate::plan::{PlanLimits, Resource, SubscriptionService};

/// Payment service for business logic.
pub struct PaymentService;

impl PaymentService {
    /// Records a client payment.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::NonPositiveAmount` for zero or negative amounts,
    /// `PaymentError::InvalidProof` for a proof that is not a data URL, and
    /// `PaymentError::Plan` when the plan's payment cap is reached.
    pub fn record(
        budget: &mut Budget,
        company: &Company,
        input: PaymentInput,
        limits: &PlanLimits,
        now: DateTime<Utc>,
    ) -> Result<PaymentRecord, PaymentError> {
        if input.amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount);
        }
        if input.amount > MAX_AMOUNT {
            return Err(PaymentError::AmountTooLarge(MAX_AMOUNT));
        }
        let proof = input.proof_base64.filter(|p| !p.is_empty());
        if proof.as_ref().is_some_and(|p| !p.starts_with("data:")) {
            return Err(PaymentError::InvalidProof);
        }

        let plan = SubscriptionService::effective_plan(company, now.date_naive());
        limits.ensure_can_add(plan, Resource::Payments, budget.payments.len())?;

        let record = PaymentRecord {
            id: PaymentId::new(),
            date: input.date.unwrap_or_else(|| now.date_naive()),
            amount: input.amount,
            proof_file_name: proof.as_ref().and(input.proof_file_name),
            proof_base64: proof,
            notes: input
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };
        budget.payments.push(record.clone());
        budget.updated_at = now;
        Ok(record)
    }

    /// Removes a payment and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::NotFound` for an unknown payment.
    pub fn remove(
        budget: &mut Budget,
        payment_id: PaymentId,
        now: DateTime<Utc>,
    ) -> Result<PaymentRecord, PaymentError> {
        let pos = budget
            .payments
            .iter()
            .position(|p| p.id == payment_id)
            .ok_or(PaymentError::NotFound(payment_id))?;

        budget.updated_at = now;
        Ok(budget.payments.remove(pos))
    }

    /// Paid share of a total in percent, capped at 100 and zero for a zero total.
    #[must_use]
    pub fn progress_percent(paid: Decimal, total: Decimal) -> Decimal {
        percent_of(paid, total).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    /// Summarizes the payment position of a budget.
    #[must_use]
    pub fn summary(
        budget: &Budget,
        company: &Company,
        limits: &PlanLimits,
        today: NaiveDate,
    ) -> PaymentSummary {
        let totals = budget.totals();
        let mut payments = budget.payments.clone();
        payments.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));

        let plan = SubscriptionService::effective_plan(company, today);

        PaymentSummary {
            total: totals.total,
            paid: totals.paid,
            balance: totals.balance,
            progress_percent: Self::progress_percent(totals.paid, totals.total),
            payments,
            limit: limits.check(plan, Resource::Payments, budget.payments.len()),
        }
    }
}
