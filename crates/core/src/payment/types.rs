//! Payment data types.

use atrio_shared::types::PaymentId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::plan::LimitCheck;

/// A payment received from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment ID.
    pub id: PaymentId,
    /// Day the payment was received.
    pub date: NaiveDate,
    /// Amount received.
    pub amount: Decimal,
    /// Proof of payment as a data URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_base64: Option<String>,
    /// Original file name of the proof.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_file_name: Option<String>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A payment as supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentInput {
    /// Amount received.
    pub amount: Decimal,
    /// Day received; defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Proof of payment as a data URL.
    #[serde(default)]
    pub proof_base64: Option<String>,
    /// Original file name of the proof.
    #[serde(default)]
    pub proof_file_name: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payment position of one budget.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSummary {
    /// Budget total.
    pub total: Decimal,
    /// Sum of payments.
    pub paid: Decimal,
    /// Total minus paid.
    pub balance: Decimal,
    /// Paid share of the total in percent, capped at 100.
    pub progress_percent: Decimal,
    /// Payments, newest first.
    pub payments: Vec<PaymentRecord>,
    /// Whether another payment may be recorded.
    pub limit: LimitCheck,
}
