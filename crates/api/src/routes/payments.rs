//! Payment routes.

use atrio_core::payment::{PaymentInput, PaymentService, PaymentSummary};
use atrio_db::BudgetRepository;
use atrio_shared::types::{BudgetId, PaymentId};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use chrono::Utc;
use tracing::info;

use super::budgets::modify_budget;
use super::{load_company, today};
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the payment routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets/{budget_id}/payments",
            get(list_payments).post(record_payment),
        )
        .route(
            "/budgets/{budget_id}/payments/{payment_id}",
            delete(remove_payment),
        )
}

/// GET /budgets/{budget_id}/payments - Payment position of a budget.
async fn list_payments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
) -> ApiResult<Json<PaymentSummary>> {
    let company = load_company(&state, auth.company_id())?;
    let budget = BudgetRepository::new(state.db.clone()).find(company.id, budget_id)?;
    Ok(Json(PaymentService::summary(&budget, &company, &state.plan_limits, today())))
}

/// POST /budgets/{budget_id}/payments - Record a client payment.
async fn record_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(budget_id): Path<BudgetId>,
    Json(payload): Json<PaymentInput>,
) -> ApiResult<(StatusCode, Json<PaymentSummary>)> {
    let company = load_company(&state, auth.company_id())?;
    let limits = state.plan_limits;

    let (payment, budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(PaymentService::record(b, &company, payload, &limits, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, payment_id = %payment.id, amount = %payment.amount, "Payment recorded");
    Ok((
        StatusCode::CREATED,
        Json(PaymentService::summary(&budget, &company, &limits, today())),
    ))
}

/// DELETE /budgets/{budget_id}/payments/{payment_id} - Remove a payment.
async fn remove_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((budget_id, payment_id)): Path<(BudgetId, PaymentId)>,
) -> ApiResult<Json<PaymentSummary>> {
    let company = load_company(&state, auth.company_id())?;

    let (_, budget) = modify_budget(&state, company.id, budget_id, |b| {
        Ok(PaymentService::remove(b, payment_id, Utc::now())?)
    })?;

    info!(budget_id = %budget.id, payment_id = %payment_id, "Payment removed");
    Ok(Json(PaymentService::summary(&budget, &company, &state.plan_limits, today())))
}
