//! Budgets (quotes) issued by a company to its clients.
//!
//! A budget embeds its line items, the job expenses and the client payments.
//! All amounts are exact decimals; see [`totals`] for the single definition
//! of subtotal, tax and total used across the crate.

pub mod error;
pub mod service;
pub mod totals;
pub mod types;


pub use error::BudgetError;
pub use service::BudgetService;
pub use totals::{BudgetTotals, line_total};
pub use types::{
    Budget, BudgetFilter, BudgetInput, BudgetItem, BudgetItemInput, BudgetItemUpdate, BudgetStatus,
    Client,
};
