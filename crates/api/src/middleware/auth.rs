//! Bearer token authentication for protected routes.

use atrio_db::UserRepository;
use atrio_shared::types::{CompanyId, UserId};
use atrio_shared::{AppError, Claims, JwtError};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::AppState;
use crate::error::ApiError;

/// Token part of an `Authorization: Bearer <token>` header value.
fn extract_bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Admits a request only with a valid token of an account that still exists
/// and is active. The verified [`Claims`] are left in the request extensions
/// for [`AuthUser`].
///
/// # Errors
///
/// 401 for a missing, expired or forged token or a deleted account, 403 for
/// a suspended or blocked account.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Bearer token is required".to_string()))?;

    let claims = state.jwt_service.verify(token).map_err(|err| {
        debug!(error = %err, "Token refused");
        match err {
            JwtError::Expired => AppError::Unauthorized("Session has expired".to_string()),
            _ => AppError::Unauthorized("Invalid session token".to_string()),
        }
    })?;

    let user = UserRepository::new(state.db.clone())
        .find_by_id(UserId::from_uuid(claims.user_id()))
        .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))?;

    if !user.status.allows_access() {
        warn!(user_id = %user.id, status = user.status.as_str(), "Refused request from disabled account");
        return Err(AppError::Forbidden("This account has been suspended or blocked".to_string()).into());
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// The caller of a protected route.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The calling user.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.0.user_id())
    }

    /// The tenant every query of this request is scoped to.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        CompanyId::from_uuid(self.0.company_id())
    }

    /// Whether the caller operates the platform.
    #[must_use]
    pub fn is_master(&self) -> bool {
        self.0.is_master()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()).into())
    }
}
