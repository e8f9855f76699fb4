//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - Error responses

pub mod error;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use atrio_core::analytics::AnalyticsCache;
use atrio_core::plan::PlanLimits;
use atrio_db::Database;
use atrio_shared::JwtService;
use atrio_shared::config::{AuthConfig, NotificationConfig};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store handle.
    pub db: Database,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Free plan limits and Premium period.
    pub plan_limits: PlanLimits,
    /// Master account settings.
    pub auth_config: Arc<AuthConfig>,
    /// Broadcast settings.
    pub notification_config: NotificationConfig,
    /// Per-company analytics reports.
    pub analytics_cache: AnalyticsCache,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
