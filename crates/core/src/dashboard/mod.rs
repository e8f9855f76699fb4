//! Company-wide dashboard figures.
//!
//! This module provides:
//! - Headline totals (paid, approved, pending, outstanding balance)
//! - Budget counts per status
//! - The most recent budgets

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{BudgetOverview, DashboardSummary, StatusCounts};
