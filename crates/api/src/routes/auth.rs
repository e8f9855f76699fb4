//! Authentication routes for register, login, and the current account.

use atrio_core::auth::{hash_password, normalize_email, validate_credentials, verify_password};
use atrio_core::company::{Company, CompanyService, NewCompany, User, UserStatus};
use atrio_core::plan::{SubscriptionService, SubscriptionStatus};
use atrio_db::{CompanyRepository, StoreError, UserRepository};
use atrio_shared::types::{CountryCode, UserId};
use atrio_shared::{AppError, UserRole};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::company::CompanyView;
use super::{load_company, today};
use crate::{
    AppState,
    error::{ApiError, ApiResult},
    middleware::AuthUser,
};

/// Creates the public auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

/// Creates the auth routes that need a signed-in user.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Login email, also used as the company contact.
    pub email: String,
    /// Plain password.
    pub password: String,
    /// Trading name of the new company.
    pub company_name: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Country; defaults to Portugal.
    #[serde(default)]
    pub country: CountryCode,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain password.
    pub password: String,
}

/// Public part of a user profile.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: UserId,
    /// Login email.
    pub email: String,
    /// Platform role.
    pub role: UserRole,
    /// Access status.
    pub status: UserStatus,
    /// Whether the email was confirmed.
    pub is_verified: bool,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            status: user.status,
            is_verified: user.is_verified,
        }
    }
}

/// Response for register and login.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Bearer token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: &'static str,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// Signed-in user.
    pub user: UserInfo,
    /// The user's company.
    pub company: CompanyView,
}

/// Response for the current account.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Signed-in user.
    pub user: UserInfo,
    /// The user's company.
    pub company: CompanyView,
    /// Subscription state.
    pub subscription: SubscriptionStatus,
}

fn issue_session(state: &AppState, user: &User, company: Company) -> ApiResult<SessionResponse> {
    let access_token = state
        .jwt_service
        .issue(user.id.into_inner(), company.id.into_inner(), user.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(SessionResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.jwt_service.ttl_secs(),
        user: UserInfo::from(user),
        company: CompanyView::new(company, today()),
    })
}

/// POST /auth/register - Open a company and its first account.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    validate_credentials(&payload.email, &payload.password)?;
    if payload.company_name.trim().is_empty() {
        return Err(AppError::Validation("Company name is required".to_string()).into());
    }

    let email = normalize_email(&payload.email);
    let users = UserRepository::new(state.db.clone());
    if users.email_exists(&email) {
        return Err(StoreError::DuplicateEmail(email).into());
    }

    let password_hash = hash_password(&payload.password)?;
    let now = Utc::now();

    let companies = CompanyRepository::new(state.db.clone());
    let company = companies.create(CompanyService::create(
        NewCompany {
            name: payload.company_name,
            email: email.clone(),
            phone: payload.phone,
            country: payload.country,
        },
        now,
    ));

    let role = if state.auth_config.is_master_email(&email) {
        UserRole::Master
    } else {
        UserRole::User
    };

    let user = match users.create(User {
        id: UserId::new(),
        email,
        password_hash,
        company_id: company.id,
        is_verified: true,
        role,
        status: UserStatus::Active,
        created_at: now,
    }) {
        Ok(user) => user,
        Err(e) => {
            // Lost a race on the same email.
            companies.remove(company.id);
            return Err(e.into());
        }
    };

    info!(user_id = %user.id, company_id = %company.id, role = %user.role, "Account registered");

    Ok((StatusCode::CREATED, Json(issue_session(&state, &user, company)?)))
}

/// POST /auth/login - Authenticate user and return a token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let invalid = || ApiError(AppError::Unauthorized("Invalid email or password".to_string()));

    let users = UserRepository::new(state.db.clone());
    let Some(user) = users.find_by_email(&payload.email) else {
        info!("Login attempt for unknown email");
        return Err(invalid());
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(invalid());
    }

    if !user.status.allows_access() {
        return Err(AppError::Forbidden(format!("This account is {}", user.status.as_str())).into());
    }

    let company = load_company(&state, user.company_id)?;
    info!(user_id = %user.id, "User logged in successfully");

    Ok(Json(issue_session(&state, &user, company)?))
}

/// GET /me - The signed-in user and company.
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<MeResponse>> {
    let users = UserRepository::new(state.db.clone());
    let user = users
        .find_by_id(auth.user_id())
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let company = load_company(&state, auth.company_id())?;
    let today = today();

    Ok(Json(MeResponse {
        user: UserInfo::from(&user),
        subscription: SubscriptionService::status(&company, today),
        company: CompanyView::new(company, today),
    }))
}
