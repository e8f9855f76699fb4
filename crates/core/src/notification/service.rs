//! Notification service.

use std::collections::HashSet;

use atrio_shared::types::NotificationId;
use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::error::NotificationError;
use super::types::{AppNotification, Audience, NotificationInput, NotificationKind, NotificationTarget};
use crate::company::Company;
use crate::plan::SubscriptionService;

/// Notification service for business logic.
pub struct NotificationService;

impl NotificationService {
    /// Builds a broadcast that stays visible for `ttl_hours`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty title or message, or a banner
    /// image that is neither a data URL nor an https URL.
    pub fn compose(
        input: NotificationInput,
        now: DateTime<Utc>,
        ttl_hours: i64,
    ) -> Result<AppNotification, NotificationError> {
        let title = input.title.trim().to_string();
        let message = input.message.trim().to_string();
        if title.is_empty() {
            return Err(NotificationError::EmptyTitle);
        }
        if message.is_empty() {
            return Err(NotificationError::EmptyMessage);
        }

        let banner_image = input.banner_image.filter(|img| !img.trim().is_empty());
        if banner_image
            .as_deref()
            .is_some_and(|img| !img.starts_with("data:image/") && !img.starts_with("https://"))
        {
            return Err(NotificationError::InvalidBannerImage);
        }

        Ok(AppNotification {
            id: NotificationId::new(),
            title,
            message,
            created_at: now,
            expires_at: Duration::try_hours(ttl_hours)
                .and_then(|ttl| now.checked_add_signed(ttl))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            target: input.target,
            kind: input.kind,
            is_auto: false,
            is_banner: input.is_banner,
            banner_image,
        })
    }

    /// Live notifications the audience may see, newest first.
    #[must_use]
    pub fn visible_to(
        notifications: &[AppNotification],
        audience: Audience,
        now: DateTime<Utc>,
    ) -> Vec<AppNotification> {
        let mut visible: Vec<AppNotification> = notifications
            .iter()
            .filter(|n| !n.is_expired(now))
            .filter(|n| match audience {
                Audience::Master => true,
                Audience::Plan(plan) => n.target.includes(plan),
            })
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        visible
    }

    /// First unread banner among the visible notifications.
    #[must_use]
    pub fn featured_banner<'a>(
        visible: &'a [AppNotification],
        read: &HashSet<NotificationId>,
    ) -> Option<&'a AppNotification> {
        visible.iter().find(|n| n.is_banner && !read.contains(&n.id))
    }

    /// Number of visible notifications not yet read.
    #[must_use]
    pub fn unread_count(visible: &[AppNotification], read: &HashSet<NotificationId>) -> usize {
        visible.iter().filter(|n| !read.contains(&n.id)).count()
    }

    /// Renewal notice for a Premium subscription ending within the notice window.
    ///
    /// The notice ID is derived from the company ID so that marking it as read
    /// sticks across requests.
    #[must_use]
    pub fn subscription_reminder(
        company: &Company,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Option<AppNotification> {
        let days = SubscriptionService::renewal_due_in(company, today)?;
        let message = match days {
            0 => "Your Premium subscription ends today. Renew to keep unlimited budgets and analytics.".to_string(),
            1 => "Your Premium subscription ends tomorrow. Renew to keep unlimited budgets and analytics.".to_string(),
            n => format!(
                "Your Premium subscription ends in {n} days. Renew to keep unlimited budgets and analytics."
            ),
        };

        Some(AppNotification {
            id: NotificationId::from_uuid(company.id.into_inner()),
            title: "Premium renewal".to_string(),
            message,
            created_at: now,
            expires_at: now + Duration::days(1),
            target: NotificationTarget::Premium,
            kind: NotificationKind::System,
            is_auto: true,
            is_banner: false,
            banner_image: None,
        })
    }
}
