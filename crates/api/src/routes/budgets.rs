//! Budget management routes.

use atrio_core::budget::{
    Budget, BudgetFilter, BudgetInput, BudgetItemInput, BudgetItemUpdate, BudgetService,
    BudgetStatus, BudgetTotals,
};
use atrio_core::document::BudgetDocument;
use atrio_core::project::ProjectSummary;
use atrio_db::BudgetRepository;
use atrio_shared::AppError;
use atrio_shared::types::{BudgetId, BudgetItemId, CompanyId, PageRequest, PageResponse};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::load_company;
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the budget routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route(
            "/budgets/{budget_id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
        .route("/budgets/{budget_id}/status", put(set_status))
        .route("/budgets/{budget_id}/items", post(add_item))
        .route(
            "/budgets/{budget_id}/items/{item_id}",
            put(update_item).delete(remove_item),
        )
        .route("/budgets/{budget_id}/totals", get(get_totals))
        .route("/budgets/{budget_id}/summary", get(get_summary))
        .route("/budgets/{budget_id}/document", get(get_document))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing budgets.
#[derive(Debug, Default, Deserialize)]
pub struct ListBudgetsQuery {
    /// Status filter; `pending` is accepted for drafts.
    pub status: Option<String>,
    /// Case-insensitive match on client name or reference number.
    pub search: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// Request body for a status change.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    /// New status.
    pub status: String,
}

/// A budget with its computed figures.
#[derive(Debug, Serialize)]
pub struct BudgetView {
    /// Stored budget.
    #[serde(flatten)]
    pub budget: Budget,
    /// Subtotal, tax, total, costs, paid and balance.
    pub totals: BudgetTotals,
}

impl From<Budget> for BudgetView {
    fn from(budget: Budget) -> Self {
        let totals = budget.totals();
        Self { budget, totals }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_status(raw: &str) -> Result<BudgetStatus, AppError> {
    BudgetStatus::parse(raw).ok_or_else(|| AppError::Validation(format!("Unknown budget status: {raw}")))
}

/// Applies a change to one of the company's budgets and drops its cached analytics.
pub(crate) fn modify_budget<T>(
    state: &AppState,
    company_id: CompanyId,
    budget_id: BudgetId,
    change: impl FnOnce(&mut Budget) -> Result<T, AppError>,
) -> ApiResult<(T, Budget)> {
    let result = BudgetRepository::new(state.db.clone()).update(company_id, budget_id, change)?;
    state.analytics_cache.invalidate(company_id);
    Ok(result)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /budgets - List the company's budgets, newest first.
async fn list_budgets(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListBudgetsQuery>,
) -> ApiResult<Json<PageResponse<BudgetView>>> {
    let filter = BudgetFilter {
        status: query.status.as_deref().map(parse_status).transpose()?,
        search: query.search,
    };
    let page = PageRequest::new(query.page, query.per_page);

    let budgets = BudgetRepository::new(state.db.clone()).list_for_company(auth.company_id());
    let result = BudgetService::query(budgets, &filter, page);

    Ok(Json(result.map(BudgetView::from)))
}

/// POST /budgets - Create a budget.
async fn create_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<BudgetInput>,
) -> ApiResult<(StatusCode, Json<BudgetView>)> {
    let company = load_company(&state, auth.company_id())?;
    let budget = BudgetService::create(&company, payload, &state.plan_limits, Utc::now())?;
    let budget = BudgetRepository::new(state.db.clone()).insert(budget);
    state.analytics_cache.invalidate(company.id);

    info!(budget_id = %budget.id, number = %budget.number, "Budget created");
    Ok((StatusCode::CREATED, Json(BudgetView::from(budget))))
}

/// GET /budgets/{budget_id} - Get one budget.
async fn get_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<BudgetView>> {
    let budget = BudgetRepository::new(state.db.clone()).find(auth.company_id(), budget_id)?;
    Ok(Json(BudgetView::from(budget)))
}

/// PUT /budgets/{budget_id} - Replace the editable contents of a budget.
async fn update_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
    Json(payload): Json<BudgetInput>,
) -> ApiResult<Json<BudgetView>> {
    let company = load_company(&state, auth.company_id())?;
    let limits = state.plan_limits;

    let ((), budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(BudgetService::update(b, &company, payload, &limits, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, "Budget updated");
    Ok(Json(BudgetView::from(budget)))
}

/// DELETE /budgets/{budget_id} - Delete a budget.
async fn delete_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<StatusCode> {
    let budget = BudgetRepository::new(state.db.clone()).delete(auth.company_id(), budget_id)?;
    state.analytics_cache.invalidate(auth.company_id());

    info!(budget_id = %budget.id, number = %budget.number, "Budget deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /budgets/{budget_id}/status - Change the status.
async fn set_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
    Json(payload): Json<StatusRequest>,
) -> ApiResult<Json<BudgetView>> {
    let status = parse_status(&payload.status)?;

    let ((), budget) = modify_budget(&state, auth.company_id(), budget_id, |b| {
        BudgetService::set_status(b, status, Utc::now());
        Ok(())
    })?;

    info!(budget_id = %budget.id, status = %status, "Budget status changed");
    Ok(Json(BudgetView::from(budget)))
}

/// POST /budgets/{budget_id}/items - Add a line item.
async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
    Json(payload): Json<BudgetItemInput>,
) -> ApiResult<(StatusCode, Json<BudgetView>)> {
    let company = load_company(&state, auth.company_id())?;
    let limits = state.plan_limits;

    let (item, budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(BudgetService::add_item(b, &company, payload, &limits, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, item_id = %item.id, "Budget item added");
    Ok((StatusCode::CREATED, Json(BudgetView::from(budget))))
}

/// PUT /budgets/{budget_id}/items/{item_id} - Edit a line item.
async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((budget_id, item_id)): Path<(BudgetId, BudgetItemId)>,
    Json(payload): Json<BudgetItemUpdate>,
) -> ApiResult<Json<BudgetView>> {
    let (_, budget) = modify_budget(&state, auth.company_id(), budget_id, |b| {
        Ok(BudgetService::update_item(b, item_id, payload, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, item_id = %item_id, "Budget item updated");
    Ok(Json(BudgetView::from(budget)))
}

/// DELETE /budgets/{budget_id}/items/{item_id} - Remove a line item.
async fn remove_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((budget_id, item_id)): Path<(BudgetId, BudgetItemId)>,
) -> ApiResult<Json<BudgetView>> {
    let (_, budget) = modify_budget(&state, auth.company_id(), budget_id, |b| {
        Ok(BudgetService::remove_item(b, item_id, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, item_id = %item_id, "Budget item removed");
    Ok(Json(BudgetView::from(budget)))
}

/// GET /budgets/{budget_id}/totals - Money figures of a budget.
async fn get_totals(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<BudgetTotals>> {
    let budget = BudgetRepository::new(state.db.clone()).find(auth.company_id(), budget_id)?;
    Ok(Json(budget.totals()))
}

/// GET /budgets/{budget_id}/summary - Profitability of a budget.
async fn get_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<ProjectSummary>> {
    let budget = BudgetRepository::new(state.db.clone()).find(auth.company_id(), budget_id)?;
    Ok(Json(ProjectSummary::for_budget(&budget)))
}

/// GET /budgets/{budget_id}/document - Printable quote as an HTML attachment.
async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Response> {
    let company = load_company(&state, auth.company_id())?;
    let budget = BudgetRepository::new(state.db.clone()).find(company.id, budget_id)?;
    let document = BudgetDocument::render(&budget, &company)?;

    info!(budget_id = %budget.id, file_name = %document.file_name, "Budget document rendered");
    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, document.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.body,
    )
        .into_response())
}
