//! Storage layer for Atrio.
//!
//! This crate provides:
//! - An in-process store with one concurrent table per entity
//! - Repository abstractions scoped by company
//! - JSON snapshots for persistence across restarts

pub mod error;
pub mod repositories;
pub mod snapshot;
pub mod store;

pub use error::StoreError;
pub use repositories::{BudgetRepository, CompanyRepository, NotificationRepository, UserRepository};
pub use snapshot::Snapshot;
pub use store::Database;

use std::path::Path;

/// Opens the store, loading the snapshot at `snapshot_path` when one exists.
///
/// # Errors
///
/// Returns an error if an existing snapshot cannot be read or parsed.
pub fn connect(snapshot_path: Option<&Path>) -> Result<Database, StoreError> {
    match snapshot_path {
        Some(path) if path.exists() => Database::load_snapshot(path),
        Some(path) => {
            tracing::info!(path = %path.display(), "No snapshot found, starting with an empty store");
            Ok(Database::new())
        }
        None => Ok(Database::new()),
    }
}
