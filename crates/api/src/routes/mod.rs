//! API route definitions.

use atrio_core::company::Company;
use atrio_db::CompanyRepository;
use atrio_shared::types::CompanyId;
use axum::{Router, middleware};
use chrono::{NaiveDate, Utc};

use crate::{AppState, error::ApiResult, middleware::auth_middleware};

pub mod analytics;
pub mod auth;
pub mod budgets;
pub mod company;
pub mod dashboard;
pub mod expenses;
pub mod health;
pub mod notifications;
pub mod payments;

#[cfg(test)]
mod tests;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(auth::protected_routes())
        .merge(company::routes())
        .merge(budgets::routes())
        .merge(payments::routes())
        .merge(expenses::routes())
        .merge(dashboard::routes())
        .merge(analytics::routes())
        .merge(notifications::routes())
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}

/// Current calendar day in UTC.
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Loads the caller's company.
pub(crate) fn load_company(state: &AppState, company_id: CompanyId) -> ApiResult<Company> {
    Ok(CompanyRepository::new(state.db.clone()).get(company_id)?)
}
