//! Budget repository.

use atrio_core::budget::Budget;
use atrio_shared::types::{BudgetId, CompanyId};

use crate::error::StoreError;
use crate::store::Database;

/// Budget repository. Every lookup is scoped by company.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: Database,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Lists the budgets of a company in no particular order.
    #[must_use]
    pub fn list_for_company(&self, company_id: CompanyId) -> Vec<Budget> {
        self.db
            .tables
            .budgets
            .iter()
            .filter(|b| b.company_id == company_id)
            .map(|b| b.value().clone())
            .collect()
    }

    /// Finds a budget of the company.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the budget does not exist or
    /// belongs to another company.
    pub fn find(&self, company_id: CompanyId, id: BudgetId) -> Result<Budget, StoreError> {
        self.db
            .tables
            .budgets
            .get(&id)
            .filter(|b| b.company_id == company_id)
            .map(|b| b.value().clone())
            .ok_or_else(|| StoreError::not_found("Budget", id))
    }

    /// Inserts a budget.
    pub fn insert(&self, budget: Budget) -> Budget {
        self.db.tables.budgets.insert(budget.id, budget.clone());
        budget
    }

    /// Applies a change to a budget of the company and stores the result.
    ///
    /// The change runs on a copy and is written back only when it succeeds.
    ///
    /// # Errors
    ///
    /// Returns the error of `change`, or `StoreError::NotFound` converted into
    /// `E` when the budget is missing or belongs to another company.
    pub fn update<T, E>(
        &self,
        company_id: CompanyId,
        id: BudgetId,
        change: impl FnOnce(&mut Budget) -> Result<T, E>,
    ) -> Result<(T, Budget), E>
    where
        E: From<StoreError>,
    {
        let mut entry = self
            .db
            .tables
            .budgets
            .get_mut(&id)
            .filter(|b| b.company_id == company_id)
            .ok_or_else(|| StoreError::not_found("Budget", id))?;

        let mut draft = entry.value().clone();
        let out = change(&mut draft)?;
        draft.company_id = company_id;
        *entry.value_mut() = draft.clone();
        Ok((out, draft))
    }

    /// Deletes a budget of the company.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the budget is missing or belongs to
    /// another company.
    pub fn delete(&self, company_id: CompanyId, id: BudgetId) -> Result<Budget, StoreError> {
        self.db
            .tables
            .budgets
            .remove_if(&id, |_, b| b.company_id == company_id)
            .map(|(_, b)| b)
            .ok_or_else(|| StoreError::not_found("Budget", id))
    }
}
