//! Notification repository.

use std::collections::HashSet;

use atrio_core::notification::AppNotification;
use atrio_shared::types::{NotificationId, UserId};
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::store::Database;

/// Notification and read-receipt repository.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    db: Database,
}

impl NotificationRepository {
    /// Creates a new notification repository.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Lists every stored notification.
    #[must_use]
    pub fn list(&self) -> Vec<AppNotification> {
        self.db
            .tables
            .notifications
            .iter()
            .map(|n| n.value().clone())
            .collect()
    }

    /// Finds a notification by ID.
    #[must_use]
    pub fn find_by_id(&self, id: NotificationId) -> Option<AppNotification> {
        self.db.tables.notifications.get(&id).map(|n| n.value().clone())
    }

    /// Inserts a notification.
    pub fn insert(&self, notification: AppNotification) -> AppNotification {
        self.db
            .tables
            .notifications
            .insert(notification.id, notification.clone());
        notification
    }

    /// Deletes a notification and forgets every read receipt for it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown notification.
    pub fn delete(&self, id: NotificationId) -> Result<AppNotification, StoreError> {
        let (_, removed) = self
            .db
            .tables
            .notifications
            .remove(&id)
            .ok_or_else(|| StoreError::not_found("Notification", id))?;

        for mut receipts in self.db.tables.read_receipts.iter_mut() {
            receipts.remove(&id);
        }
        Ok(removed)
    }

    /// Records that the user read a notification. Returns false if it was
    /// already marked.
    pub fn mark_read(&self, user_id: UserId, id: NotificationId) -> bool {
        self.db
            .tables
            .read_receipts
            .entry(user_id)
            .or_default()
            .insert(id)
    }

    /// Notifications the user has read.
    #[must_use]
    pub fn read_ids(&self, user_id: UserId) -> HashSet<NotificationId> {
        self.db
            .tables
            .read_receipts
            .get(&user_id)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    /// Deletes notifications that expired before `now`. Returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let expired: Vec<NotificationId> = self
            .db
            .tables
            .notifications
            .iter()
            .filter(|n| n.is_expired(now))
            .map(|n| n.id)
            .collect();

        expired
            .into_iter()
            .filter(|id| self.delete(*id).is_ok())
            .count()
    }
}
