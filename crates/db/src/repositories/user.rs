//! User profile repository.

use atrio_core::company::User;
use atrio_shared::types::UserId;
use dashmap::mapref::entry::Entry;

use crate::error::StoreError;
use crate::store::Database;

/// User repository for profile operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    #[must_use]
    pub fn find_by_id(&self, id: UserId) -> Option<User> {
        self.db.tables.profiles.get(&id).map(|u| u.value().clone())
    }

    /// Finds a user by email, ignoring case.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let id = *self.db.tables.emails.get(&email.trim().to_lowercase())?;
        self.find_by_id(id)
    }

    /// Checks if an email is already registered.
    #[must_use]
    pub fn email_exists(&self, email: &str) -> bool {
        self.db
            .tables
            .emails
            .contains_key(&email.trim().to_lowercase())
    }

    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateEmail` if the email is taken.
    pub fn create(&self, user: User) -> Result<User, StoreError> {
        let email = user.email.trim().to_lowercase();
        match self.db.tables.emails.entry(email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail(email)),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.db.tables.profiles.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }
}
