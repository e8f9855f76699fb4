//! Company profile and subscription routes.

use atrio_core::company::{Company, CompanyService, CompanyUpdate, Specialty};
use atrio_core::plan::{LimitCheck, PlanType, Resource, SubscriptionService, SubscriptionStatus};
use atrio_db::CompanyRepository;
use atrio_shared::AppError;
use atrio_shared::types::Currency;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::{load_company, today};
use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Creates the company routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/company", get(get_company).put(update_company))
        .route(
            "/company/specialties/{specialty}/toggle",
            post(toggle_specialty),
        )
        .route("/company/subscription", get(get_subscription))
        .route("/company/subscription/upgrade", post(upgrade))
        .route("/company/subscription/downgrade", post(downgrade))
}

/// A company together with the plan currently in force.
#[derive(Debug, Serialize)]
pub struct CompanyView {
    /// Stored company.
    #[serde(flatten)]
    pub company: Company,
    /// Plan after applying subscription expiry.
    pub effective_plan: PlanType,
    /// Currency quotes are issued in.
    pub currency: Currency,
}

impl CompanyView {
    /// Wraps a company as seen on `today`.
    #[must_use]
    pub fn new(company: Company, today: NaiveDate) -> Self {
        let effective_plan = SubscriptionService::effective_plan(&company, today);
        let currency = company.country.currency();
        Self {
            company,
            effective_plan,
            currency,
        }
    }
}

/// Response for a specialty toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    /// True when the specialty is now selected.
    pub selected: bool,
    /// Updated company.
    pub company: CompanyView,
}

/// Response for the subscription endpoints.
#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    /// Subscription state.
    #[serde(flatten)]
    pub status: SubscriptionStatus,
    /// Company-wide usage against the plan.
    pub specialties: LimitCheck,
    /// Per-budget caps; `null` means unlimited.
    pub budget_limits: BudgetLimits,
}

/// Per-budget caps of the effective plan.
#[derive(Debug, Serialize)]
pub struct BudgetLimits {
    /// Line items per budget.
    pub items: Option<usize>,
    /// Payments per budget.
    pub payments: Option<usize>,
    /// Expenses per budget.
    pub expenses: Option<usize>,
}

fn subscription_response(state: &AppState, company: &Company) -> SubscriptionResponse {
    let status = SubscriptionService::status(company, today());
    let plan = status.effective_plan;
    let limits = &state.plan_limits;

    SubscriptionResponse {
        specialties: limits.check(plan, Resource::Specialties, company.specialties.len()),
        budget_limits: BudgetLimits {
            items: limits.max_for(plan, Resource::BudgetItems),
            payments: limits.max_for(plan, Resource::Payments),
            expenses: limits.max_for(plan, Resource::Expenses),
        },
        status,
    }
}

/// GET /company - The caller's company.
async fn get_company(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<CompanyView>> {
    let company = load_company(&state, auth.company_id())?;
    Ok(Json(CompanyView::new(company, today())))
}

/// PUT /company - Update profile fields.
async fn update_company(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CompanyUpdate>,
) -> ApiResult<Json<CompanyView>> {
    let today = today();
    let limits = state.plan_limits;

    let ((), company) = CompanyRepository::new(state.db.clone()).update(auth.company_id(), |c| {
        CompanyService::apply_update(c, payload, &limits, today).map_err(AppError::from)
    })?;
    state.analytics_cache.invalidate(company.id);

    info!(company_id = %company.id, "Company profile updated");
    Ok(Json(CompanyView::new(company, today)))
}

/// POST /company/specialties/{specialty}/toggle - Select or deselect a specialty.
async fn toggle_specialty(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(specialty): Path<String>,
) -> ApiResult<Json<ToggleResponse>> {
    let specialty = Specialty::parse(&specialty)
        .ok_or_else(|| AppError::Validation(format!("Unknown specialty: {specialty}")))?;
    let today = today();
    let limits = state.plan_limits;

    let (selected, company) = CompanyRepository::new(state.db.clone()).update(auth.company_id(), |c| {
        CompanyService::toggle_specialty(c, specialty, &limits, today).map_err(AppError::from)
    })?;
    state.analytics_cache.invalidate(company.id);

    info!(company_id = %company.id, specialty = specialty.as_str(), selected, "Specialty toggled");
    Ok(Json(ToggleResponse {
        selected,
        company: CompanyView::new(company, today),
    }))
}

/// GET /company/subscription - Plan, expiry and limits.
async fn get_subscription(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SubscriptionResponse>> {
    let company = load_company(&state, auth.company_id())?;
    Ok(Json(subscription_response(&state, &company)))
}

/// POST /company/subscription/upgrade - Start or renew a Premium period.
async fn upgrade(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<SubscriptionResponse>> {
    let limits = state.plan_limits;
    let ((), company) = CompanyRepository::new(state.db.clone()).update::<_, AppError>(auth.company_id(), |c| {
        SubscriptionService::upgrade(c, &limits, today());
        Ok(())
    })?;
    state.analytics_cache.invalidate(company.id);

    info!(company_id = %company.id, expires_on = ?company.subscription_expires_on, "Upgraded to Premium");
    Ok(Json(subscription_response(&state, &company)))
}

/// POST /company/subscription/downgrade - Return to the Free plan.
async fn downgrade(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<SubscriptionResponse>> {
    let ((), company) = CompanyRepository::new(state.db.clone()).update::<_, AppError>(auth.company_id(), |c| {
        SubscriptionService::downgrade(c);
        Ok(())
    })?;
    state.analytics_cache.invalidate(company.id);

    info!(company_id = %company.id, "Downgraded to Free");
    Ok(Json(subscription_response(&state, &company)))
}
