//! Expense routes.

use atrio_core::expense::{ExpenseInput, ExpenseService, ExpenseSummary};
use atrio_db::BudgetRepository;
use atrio_shared::types::{BudgetId, ExpenseId};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use chrono::Utc;
use tracing::info;

use super::budgets::modify_budget;
use super::{load_company, today};
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the expense routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets/{budget_id}/expenses",
            get(list_expenses).post(add_expense),
        )
        .route(
            "/budgets/{budget_id}/expenses/{expense_id}",
            put(update_expense).delete(remove_expense),
        )
}

/// GET /budgets/{budget_id}/expenses - Costs and profit of a budget.
async fn list_expenses(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<ExpenseSummary>> {
    let company = load_company(&state, auth.company_id())?;
    let budget = BudgetRepository::new(state.db.clone()).find(company.id, budget_id)?;
    Ok(Json(ExpenseService::summary(&budget, &company, &state.plan_limits, today())))
}

/// POST /budgets/{budget_id}/expenses - Record a cost.
async fn add_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
    Json(payload): Json<ExpenseInput>,
) -> ApiResult<(StatusCode, Json<ExpenseSummary>)> {
    let company = load_company(&state, auth.company_id())?;
    let limits = state.plan_limits;

    let (expense, budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(ExpenseService::add(b, &company, payload, &limits, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, expense_id = %expense.id, "Expense added");
    Ok((
        StatusCode::CREATED,
        Json(ExpenseService::summary(&budget, &company, &limits, today())),
    ))
}

/// PUT /budgets/{budget_id}/expenses/{expense_id} - Edit a cost.
async fn update_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((budget_id, expense_id)): Path<(BudgetId, ExpenseId)>,
    Json(payload): Json<ExpenseInput>,
) -> ApiResult<Json<ExpenseSummary>> {
    let company = load_company(&state, auth.company_id())?;

    let (_, budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(ExpenseService::update(b, expense_id, payload, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, expense_id = %expense_id, "Expense updated");
    Ok(Json(ExpenseService::summary(&budget, &company, &state.plan_limits, today())))
}

/// DELETE /budgets/{budget_id}/expenses/{expense_id} - Remove a cost.
async fn remove_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((budget_id, expense_id)): Path<(BudgetId, ExpenseId)>,
) -> ApiResult<Json<ExpenseSummary>> {
    let company = load_company(&state, auth.company_id())?;

    let (_, budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(ExpenseService::remove(b, expense_id, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, expense_id = %expense_id, "Expense removed");
    Ok(Json(ExpenseService::summary(&budget, &company, &state.plan_limits, today())))
}
