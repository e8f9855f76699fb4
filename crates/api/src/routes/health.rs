//! Liveness check.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    store: StoreStats,
}

#[derive(Serialize)]
struct StoreStats {
    companies: usize,
    budgets: usize,
}

/// GET /health - Reports the running version and how much data is loaded.
async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: StoreStats {
            companies: state.db.company_count(),
            budgets: state.db.budget_count(),
        },
    })
}

/// Public health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
