//! Account roles and session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform-level role of a user account.
///
/// Company data is always scoped by tenant, so the role only decides who may
/// operate the platform itself (publishing broadcasts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Member of a company.
    #[default]
    User,
    /// Platform operator.
    Master,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Master => "master",
        })
    }
}

/// Payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: Uuid,
    /// Tenant the user belongs to.
    pub company: Uuid,
    /// Platform role.
    pub role: UserRole,
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Expires at, Unix seconds.
    pub exp: i64,
}

impl Claims {
    /// Claims issued now and valid until `expires_at`.
    #[must_use]
    pub fn new(user_id: Uuid, company_id: Uuid, role: UserRole, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id,
            company: company_id,
            role,
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// The signed-in user.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// The user's company.
    #[must_use]
    pub const fn company_id(&self) -> Uuid {
        self.company
    }

    /// Whether the holder may publish and delete broadcasts.
    #[must_use]
    pub const fn is_master(&self) -> bool {
        matches!(self.role, UserRole::Master)
    }
}
