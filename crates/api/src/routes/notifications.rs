//! Broadcast notification routes.

use atrio_core::notification::{
    AppNotification, Audience, NotificationError, NotificationInput, NotificationService,
};
use atrio_core::plan::SubscriptionService;
use atrio_db::NotificationRepository;
use atrio_shared::AppError;
use atrio_shared::types::NotificationId;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::{load_company, today};
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the notification routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list_notifications).post(create_notification))
        .route("/notifications/{notification_id}", delete(delete_notification))
        .route("/notifications/{notification_id}/read", post(mark_read))
}

/// A notification with the caller's read state.
#[derive(Debug, Serialize)]
pub struct NotificationView {
    /// The notification.
    #[serde(flatten)]
    pub notification: AppNotification,
    /// Whether the caller has read it.
    pub is_read: bool,
}

/// Notifications visible to the caller.
#[derive(Debug, Serialize)]
pub struct NotificationFeed {
    /// Visible notifications, newest first.
    pub notifications: Vec<NotificationView>,
    /// Number of unread entries.
    pub unread_count: usize,
    /// First unread banner.
    pub banner: Option<AppNotification>,
}

fn require_master(auth: &AuthUser) -> Result<(), AppError> {
    if auth.is_master() {
        Ok(())
    } else {
        Err(AppError::Forbidden("Only master accounts can manage notifications".to_string()))
    }
}

/// Visible notifications for the caller, including the renewal notice.
fn visible_for(state: &AppState, auth: &AuthUser) -> ApiResult<Vec<AppNotification>> {
    let company = load_company(state, auth.company_id())?;
    let now = Utc::now();
    let today = today();

    let audience = if auth.is_master() {
        Audience::Master
    } else {
        Audience::Plan(SubscriptionService::effective_plan(&company, today))
    };

    let stored = NotificationRepository::new(state.db.clone()).list();
    let mut visible = NotificationService::visible_to(&stored, audience, now);
    if let Some(reminder) = NotificationService::subscription_reminder(&company, today, now) {
        visible.insert(0, reminder);
    }
    Ok(visible)
}

/// GET /notifications - Notifications addressed to the caller.
async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<NotificationFeed>> {
    let visible = visible_for(&state, &auth)?;
    let read = NotificationRepository::new(state.db.clone()).read_ids(auth.user_id());

    let unread_count = NotificationService::unread_count(&visible, &read);
    let banner = NotificationService::featured_banner(&visible, &read).cloned();
    let notifications = visible
        .into_iter()
        .map(|n| NotificationView {
            is_read: read.contains(&n.id),
            notification: n,
        })
        .collect();

    Ok(Json(NotificationFeed {
        notifications,
        unread_count,
        banner,
    }))
}

/// POST /notifications - Publish a broadcast. Master only.
async fn create_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<NotificationInput>,
) -> ApiResult<(StatusCode, Json<AppNotification>)> {
    require_master(&auth)?;

    let repo = NotificationRepository::new(state.db.clone());
    let now = Utc::now();
    let purged = repo.purge_expired(now);
    let notification = repo.insert(NotificationService::compose(
        payload,
        now,
        state.notification_config.ttl_hours,
    )?);

    info!(
        notification_id = %notification.id,
        target = ?notification.target,
        purged,
        "Notification published"
    );
    Ok((StatusCode::CREATED, Json(notification)))
}

/// DELETE /notifications/{notification_id} - Withdraw a broadcast. Master only.
async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<NotificationId>,
) -> ApiResult<StatusCode> {
    require_master(&auth)?;

    NotificationRepository::new(state.db.clone())
        .delete(notification_id)
        .map_err(|_| NotificationError::NotFound(notification_id))?;

    info!(notification_id = %notification_id, "Notification deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /notifications/{notification_id}/read - Mark as read. Idempotent.
async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<NotificationId>,
) -> ApiResult<StatusCode> {
    let visible = visible_for(&state, &auth)?;
    if !visible.iter().any(|n| n.id == notification_id) {
        return Err(NotificationError::NotFound(notification_id).into());
    }

    let newly_read = NotificationRepository::new(state.db.clone()).mark_read(auth.user_id(), notification_id);
    if newly_read {
        info!(notification_id = %notification_id, user_id = %auth.user_id(), "Notification read");
    }
    Ok(StatusCode::NO_CONTENT)
}
