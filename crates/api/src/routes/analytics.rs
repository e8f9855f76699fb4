//! Analytics route.

use atrio_core::analytics::{AnalyticsReport, AnalyticsService};
use atrio_db::BudgetRepository;
use axum::{Json, Router, extract::State, routing::get};
use tracing::debug;

use super::{load_company, today};
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the analytics routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/analytics", get(get_analytics))
}

/// GET /analytics - Charts over the company's budgets. Premium only.
async fn get_analytics(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<AnalyticsReport>> {
    let company = load_company(&state, auth.company_id())?;
    AnalyticsService::ensure_available(&company, today())?;

    let report = state.analytics_cache.get_or_build(company.id, || {
        let budgets = BudgetRepository::new(state.db.clone()).list_for_company(company.id);
        AnalyticsService::build(&budgets)
    });

    debug!(company_id = %company.id, cached = report.cached, "Analytics served");
    Ok(Json(report))
}
