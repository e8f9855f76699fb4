//! Dashboard route.

use atrio_core::dashboard::{DashboardService, DashboardSummary};
use atrio_db::BudgetRepository;
use axum::{Json, Router, extract::State, routing::get};

use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the dashboard routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard))
}

/// GET /dashboard - Company totals and recent budgets.
async fn get_dashboard(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<DashboardSummary>> {
    let budgets = BudgetRepository::new(state.db.clone()).list_for_company(auth.company_id());
    Ok(Json(DashboardService::build(&budgets)))
}
