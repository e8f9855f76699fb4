//! Premium analytics over a company's budgets.
//!
//! This module provides:
//! - Status breakdown, revenue per specialty and monthly trend
//! - Approved revenue, costs, profit and conversion rate
//! - A per-company result cache

pub mod cache;
pub mod service;
pub mod types;


pub use cache::AnalyticsCache;
pub use service::AnalyticsService;
pub use types::{AnalyticsReport, MonthlyPoint, SpecialtyRevenue, StatusSlice};
