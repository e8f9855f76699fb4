//! Notification error types.

use atrio_shared::AppError;
use atrio_shared::types::NotificationId;
use thiserror::Error;

/// Notification-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// Title is empty.
    #[error("Notification title is required")]
    EmptyTitle,

    /// Message is empty.
    #[error("Notification message is required")]
    EmptyMessage,

    /// Banner image is neither a data URL nor an https URL.
    #[error("Banner image must be a data URL or an https URL")]
    InvalidBannerImage,

    /// Notification not found.
    #[error("Notification not found: {0}")]
    NotFound(NotificationId),
}

impl From<NotificationError> for AppError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::NotFound(_) => Self::NotFound(err.to_string()),
            other => Self::Validation(other.to_string()),
        }
    }
}
