//! Notification data types.

use atrio_shared::types::NotificationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::PlanType;

/// Which companies a broadcast is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTarget {
    /// Every company.
    #[default]
    All,
    /// Companies on Premium.
    Premium,
    /// Companies on Free.
    Free,
}

impl NotificationTarget {
    /// Returns true if a company on `plan` is addressed.
    #[must_use]
    pub const fn includes(&self, plan: PlanType) -> bool {
        match self {
            Self::All => true,
            Self::Premium => matches!(plan, PlanType::Premium),
            Self::Free => matches!(plan, PlanType::Free),
        }
    }
}

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// General information.
    #[default]
    Info,
    /// Something needs attention.
    Warning,
    /// Premium promotion.
    Premium,
    /// Generated by the platform.
    System,
}

/// A message shown to companies until it expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppNotification {
    /// Notification ID.
    pub id: NotificationId,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Publication timestamp.
    pub created_at: DateTime<Utc>,
    /// Hidden from this moment on.
    pub expires_at: DateTime<Utc>,
    /// Addressed companies.
    pub target: NotificationTarget,
    /// Category.
    pub kind: NotificationKind,
    /// Generated by the platform rather than published by a master.
    #[serde(default)]
    pub is_auto: bool,
    /// Shown as a hero banner until read.
    #[serde(default)]
    pub is_banner: bool,
    /// Banner image as a data URL or https URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,
}

impl AppNotification {
    /// Returns true once `now` has reached the expiry.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A broadcast as composed by a master account.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationInput {
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Addressed companies.
    #[serde(default)]
    pub target: NotificationTarget,
    /// Category.
    #[serde(default)]
    pub kind: NotificationKind,
    /// Shown as a hero banner until read.
    #[serde(default)]
    pub is_banner: bool,
    /// Banner image.
    #[serde(default)]
    pub banner_image: Option<String>,
}

/// Who is reading the notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// A master account sees every live broadcast.
    Master,
    /// A company user sees broadcasts addressed to its effective plan.
    Plan(PlanType),
}
