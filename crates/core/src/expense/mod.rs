//! Job expenses recorded against a budget.

pub mod error;
pub mod service;
pub mod types;

pub use error::ExpenseError;
pub use service::ExpenseService;
pub use types::{ExpenseInput, ExpenseItem, ExpenseSummary};
