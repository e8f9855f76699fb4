//! Atrio API Server
//!
//! Main entry point for the Atrio backend service.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atrio_api::{AppState, create_router};
use atrio_core::analytics::AnalyticsCache;
use atrio_core::plan::PlanLimits;
use atrio_db::connect;
use atrio_shared::{AppConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atrio=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Open the store
    let snapshot_path = config.storage.snapshot_path.as_ref().map(PathBuf::from);
    let db = connect(snapshot_path.as_deref())?;
    info!(
        companies = db.company_count(),
        budgets = db.budget_count(),
        persistent = snapshot_path.is_some(),
        "Store ready"
    );

    // Create application state
    let state = AppState {
        db: db.clone(),
        jwt_service: Arc::new(JwtService::from_settings(&config.jwt)),
        plan_limits: PlanLimits::new(config.plans),
        auth_config: Arc::new(config.auth.clone()),
        notification_config: config.notifications,
        analytics_cache: AnalyticsCache::new(),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = snapshot_path {
        if let Err(e) = db.save_snapshot(&path) {
            error!(error = %e, path = %path.display(), "Failed to write snapshot on shutdown");
            return Err(e.into());
        }
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
