//! Budget data types.

use atrio_shared::types::{BudgetId, BudgetItemId, CompanyId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::company::Specialty;
use crate::expense::ExpenseItem;
use crate::payment::PaymentRecord;

/// Default unit for items and expenses.
pub const DEFAULT_UNIT: &str = "un";

/// Largest quantity accepted on an item or expense line (one billion).
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest unit price, unit cost or payment amount accepted (one billion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Trimmed unit, or [`DEFAULT_UNIT`] when blank or omitted.
#[must_use]
pub fn normalize_unit(unit: Option<String>) -> String {
    unit.map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_UNIT.to_string())
}

/// Lifecycle status of a budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Being prepared or awaiting the client.
    #[default]
    Draft,
    /// Accepted by the client.
    Approved,
    /// Declined by the client.
    Rejected,
}

impl BudgetStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 3] = [Self::Draft, Self::Approved, Self::Rejected];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" | "pending" => Some(Self::Draft),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client details copied into the budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client or company name.
    pub name: String,
    /// Contact person.
    #[serde(default)]
    pub contact_name: String,
    /// Site or billing address.
    #[serde(default)]
    pub address: String,
    /// Email.
    #[serde(default)]
    pub email: String,
    /// Phone.
    #[serde(default)]
    pub phone: String,
    /// Tax identifier.
    #[serde(default)]
    pub nif: String,
}

/// A quoted line: quantity × unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Item ID.
    pub id: BudgetItemId,
    /// Work description.
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit of measure (m2, un, h, ...).
    pub unit: String,
    /// Unit price before tax.
    pub price_per_unit: Decimal,
    /// Trade the work belongs to.
    pub category: Specialty,
}

/// A quote issued to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Reference number, `BGT-XXXXX`.
    pub number: String,
    /// Issue timestamp.
    pub date: DateTime<Utc>,
    /// Last day the quote is valid.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    /// Issuing company.
    pub company_id: CompanyId,
    /// Client snapshot.
    pub client: Client,
    /// Quoted lines.
    pub items: Vec<BudgetItem>,
    /// Job costs.
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
    /// Client payments.
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Status.
    pub status: BudgetStatus,
    /// Tax rate in percent.
    pub tax_rate: Decimal,
    /// Whether tax is added to the total.
    #[serde(default = "default_vat_enabled")]
    pub is_vat_enabled: bool,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

const fn default_vat_enabled() -> bool {
    true
}

/// A line item as supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetItemInput {
    /// Existing item to keep the ID of when a budget is edited.
    #[serde(default)]
    pub id: Option<BudgetItemId>,
    /// Work description.
    #[serde(default)]
    pub description: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit of measure; defaults to `un`.
    #[serde(default)]
    pub unit: Option<String>,
    /// Unit price before tax.
    pub price_per_unit: Decimal,
    /// Trade; defaults to the company's first specialty.
    #[serde(default)]
    pub category: Option<Specialty>,
}

/// Partial update of a line item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetItemUpdate {
    /// Work description.
    pub description: Option<String>,
    /// Quantity.
    pub quantity: Option<Decimal>,
    /// Unit of measure.
    pub unit: Option<String>,
    /// Unit price before tax.
    pub price_per_unit: Option<Decimal>,
    /// Trade.
    pub category: Option<Specialty>,
}

/// Budget contents as supplied by the caller on create or edit.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetInput {
    /// Client snapshot.
    pub client: Client,
    /// Quoted lines.
    #[serde(default)]
    pub items: Vec<BudgetItemInput>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Tax rate in percent; defaults to the country's VAT rate.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Whether tax is added; defaults to true.
    #[serde(default)]
    pub is_vat_enabled: Option<bool>,
    /// Last day the quote is valid.
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    /// Status; defaults to Draft.
    #[serde(default)]
    pub status: Option<BudgetStatus>,
}

/// Criteria for listing budgets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetFilter {
    /// Only budgets with this status.
    pub status: Option<BudgetStatus>,
    /// Case-insensitive match on client name or reference number.
    pub search: Option<String>,
}

impl BudgetFilter {
    /// Returns true if the budget satisfies every criterion.
    #[must_use]
    pub fn matches(&self, budget: &Budget) -> bool {
        if self.status.is_some_and(|status| status != budget.status) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                budget.client.name.to_lowercase().contains(&term)
                    || budget.number.to_lowercase().contains(&term)
            }
        }
    }
}
