//! JSON snapshots of the store.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use atrio_core::budget::Budget;
use atrio_core::company::{Company, User};
use atrio_core::notification::AppNotification;
use atrio_shared::types::{NotificationId, UserId};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::{Database, Tables};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Notifications a user has read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadReceipts {
    /// Reader.
    pub user_id: UserId,
    /// Read notifications.
    pub notification_ids: Vec<NotificationId>,
}

/// Serializable copy of every table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,
    /// User profiles.
    #[serde(default)]
    pub users: Vec<User>,
    /// Companies.
    #[serde(default)]
    pub companies: Vec<Company>,
    /// Budgets with embedded items, expenses and payments.
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Broadcast notifications.
    #[serde(default)]
    pub notifications: Vec<AppNotification>,
    /// Read receipts per user.
    #[serde(default)]
    pub read_receipts: Vec<ReadReceipts>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            users: Vec::new(),
            companies: Vec::new(),
            budgets: Vec::new(),
            notifications: Vec::new(),
            read_receipts: Vec::new(),
        }
    }
}

impl Database {
    /// Copies every table into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let t = &self.tables;
        let mut snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            users: t.profiles.iter().map(|e| e.value().clone()).collect(),
            companies: t.companies.iter().map(|e| e.value().clone()).collect(),
            budgets: t.budgets.iter().map(|e| e.value().clone()).collect(),
            notifications: t.notifications.iter().map(|e| e.value().clone()).collect(),
            read_receipts: t
                .read_receipts
                .iter()
                .map(|e| {
                    let mut ids: Vec<NotificationId> = e.value().iter().copied().collect();
                    ids.sort();
                    ReadReceipts {
                        user_id: *e.key(),
                        notification_ids: ids,
                    }
                })
                .collect(),
        };

        snapshot.users.sort_by_key(|u| u.id);
        snapshot.companies.sort_by_key(|c| c.id);
        snapshot.budgets.sort_by_key(|b| b.id);
        snapshot.notifications.sort_by_key(|n| n.id);
        snapshot.read_receipts.sort_by_key(|r| r.user_id);
        snapshot
    }

    /// Builds a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnsupportedVersion` for snapshots from another format
    /// version and `StoreError::DuplicateEmail` when two users share an email.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion(snapshot.version));
        }

        let tables = Tables::default();
        for user in snapshot.users {
            let email = user.email.to_lowercase();
            if tables.emails.insert(email.clone(), user.id).is_some() {
                return Err(StoreError::DuplicateEmail(email));
            }
            tables.profiles.insert(user.id, user);
        }
        for company in snapshot.companies {
            tables.companies.insert(company.id, company);
        }
        for budget in snapshot.budgets {
            tables.budgets.insert(budget.id, budget);
        }
        for notification in snapshot.notifications {
            tables.notifications.insert(notification.id, notification);
        }
        for receipts in snapshot.read_receipts {
            tables
                .read_receipts
                .insert(receipts.user_id, receipts.notification_ids.into_iter().collect::<HashSet<_>>());
        }

        Ok(Self {
            tables: std::sync::Arc::new(tables),
        })
    }

    /// Loads a store from a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load_snapshot(path: &Path) -> Result<Self, StoreError> {
        let bytes = fs::read(path)?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        let db = Self::from_snapshot(snapshot)?;
        tracing::info!(
            path = %path.display(),
            companies = db.company_count(),
            budgets = db.budget_count(),
            "Snapshot loaded"
        );
        Ok(db)
    }

    /// Writes the store to a snapshot file.
    ///
    /// The file is written next to the target and renamed into place.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.snapshot())?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, path)?;

        tracing::info!(path = %path.display(), bytes = json.len(), "Snapshot saved");
        Ok(())
    }
}
