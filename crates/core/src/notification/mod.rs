//! Broadcast notifications and renewal notices.

pub mod error;
pub mod service;
pub mod types;

pub use error::NotificationError;
pub use service::NotificationService;
pub use types::{AppNotification, Audience, NotificationInput, NotificationKind, NotificationTarget};
