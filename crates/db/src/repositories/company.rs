//! Company repository.

use atrio_core::company::Company;
use atrio_shared::types::CompanyId;

use crate::error::StoreError;
use crate::store::Database;

/// Company repository.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    db: Database,
}

impl CompanyRepository {
    /// Creates a new company repository.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Finds a company by ID.
    #[must_use]
    pub fn find_by_id(&self, id: CompanyId) -> Option<Company> {
        self.db.tables.companies.get(&id).map(|c| c.value().clone())
    }

    /// Finds a company by ID or fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown company.
    pub fn get(&self, id: CompanyId) -> Result<Company, StoreError> {
        self.find_by_id(id)
            .ok_or_else(|| StoreError::not_found("Company", id))
    }

    /// Inserts a company.
    pub fn create(&self, company: Company) -> Company {
        self.db.tables.companies.insert(company.id, company.clone());
        company
    }

    /// Removes a company. Used to roll back a failed registration.
    pub fn remove(&self, id: CompanyId) -> Option<Company> {
        self.db.tables.companies.remove(&id).map(|(_, c)| c)
    }

    /// Applies a change to a company and stores the result.
    ///
    /// The change runs on a copy and is written back only when it succeeds.
    ///
    /// # Errors
    ///
    /// Returns the error of `change`, or `StoreError::NotFound` converted into
    /// `E` for an unknown company.
    pub fn update<T, E>(
        &self,
        id: CompanyId,
        change: impl FnOnce(&mut Company) -> Result<T, E>,
    ) -> Result<(T, Company), E>
    where
        E: From<StoreError>,
    {
        let mut entry = self
            .db
            .tables
            .companies
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("Company", id))?;

        let mut draft = entry.value().clone();
        let out = change(&mut draft)?;
        *entry.value_mut() = draft.clone();
        Ok((out, draft))
    }
}
