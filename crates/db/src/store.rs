//! The in-process store.

use std::collections::HashSet;
use std::sync::Arc;

use atrio_core::budget::Budget;
use atrio_core::company::{Company, User};
use atrio_core::notification::AppNotification;
use atrio_shared::types::{BudgetId, CompanyId, NotificationId, UserId};
use dashmap::DashMap;

/// Concurrent tables backing the repositories.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) profiles: DashMap<UserId, User>,
    pub(crate) emails: DashMap<String, UserId>,
    pub(crate) companies: DashMap<CompanyId, Company>,
    pub(crate) budgets: DashMap<BudgetId, Budget>,
    pub(crate) notifications: DashMap<NotificationId, AppNotification>,
    pub(crate) read_receipts: DashMap<UserId, HashSet<NotificationId>>,
}

/// Handle to the store. Cloning is cheap and shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub(crate) tables: Arc<Tables>,
}

impl Database {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of companies in the store.
    #[must_use]
    pub fn company_count(&self) -> usize {
        self.tables.companies.len()
    }

    /// Number of budgets in the store.
    #[must_use]
    pub fn budget_count(&self) -> usize {
        self.tables.budgets.len()
    }
}
