//! Company and user data types.

use atrio_shared::UserRole;
use atrio_shared::types::{CompanyId, CountryCode, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::PlanType;

/// Construction trade category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// Masonry and general building work.
    Masonry,
    /// Plumbing.
    Plumbing,
    /// Electrical installations.
    Electrical,
    /// Drywall and plasterboard.
    Drywall,
    /// External thermal insulation (ETICS).
    ExternalInsulation,
    /// Painting.
    Painting,
    /// Carpentry.
    Carpentry,
    /// Plastering.
    Plastering,
    /// Anything else.
    Other,
}

impl Specialty {
    /// All specialties in display order.
    pub const ALL: [Self; 9] = [
        Self::Masonry,
        Self::Plumbing,
        Self::Electrical,
        Self::Drywall,
        Self::ExternalInsulation,
        Self::Painting,
        Self::Carpentry,
        Self::Plastering,
        Self::Other,
    ];

    /// Returns the wire name of the specialty.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Masonry => "masonry",
            Self::Plumbing => "plumbing",
            Self::Electrical => "electrical",
            Self::Drywall => "drywall",
            Self::ExternalInsulation => "external_insulation",
            Self::Painting => "painting",
            Self::Carpentry => "carpentry",
            Self::Plastering => "plastering",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Masonry => "Masonry",
            Self::Plumbing => "Plumbing",
            Self::Electrical => "Electrical",
            Self::Drywall => "Drywall",
            Self::ExternalInsulation => "External Insulation (ETICS)",
            Self::Painting => "Painting",
            Self::Carpentry => "Carpentry",
            Self::Plastering => "Plastering",
            Self::Other => "Other",
        }
    }

    /// Parses a specialty from its wire name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|sp| sp.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A construction-trade company (tenant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company ID.
    pub id: CompanyId,
    /// Trading name.
    pub name: String,
    /// Logo as a data URL, empty when unset.
    #[serde(default)]
    pub logo: String,
    /// Tax identifier.
    #[serde(default)]
    pub nif: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Website.
    #[serde(default)]
    pub website: Option<String>,
    /// Trade specialties in the order they were chosen.
    pub specialties: Vec<Specialty>,
    /// Stored plan.
    pub plan: PlanType,
    /// Country the company operates in.
    pub country: CountryCode,
    /// Last day of the Premium period.
    #[serde(default)]
    pub subscription_expires_on: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Default category for new budget items.
    #[must_use]
    pub fn default_specialty(&self) -> Specialty {
        self.specialties.first().copied().unwrap_or(Specialty::Other)
    }
}

/// Data needed to open a company at registration.
#[derive(Debug, Clone)]
pub struct NewCompany {
    /// Trading name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Country.
    pub country: CountryCode,
}

/// Partial update of the company profile. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyUpdate {
    /// Trading name.
    pub name: Option<String>,
    /// Logo data URL; empty string removes it.
    pub logo: Option<String>,
    /// Tax identifier.
    pub nif: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Website; empty string removes it.
    pub website: Option<String>,
    /// Full specialty list.
    pub specialties: Option<Vec<Specialty>>,
    /// Country.
    pub country: Option<CountryCode>,
}

/// Access status of a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Normal access.
    #[default]
    Active,
    /// Temporarily disabled.
    Suspended,
    /// Permanently disabled.
    Blocked,
}

impl UserStatus {
    /// Returns true if the account may sign in and use the API.
    #[must_use]
    pub const fn allows_access(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account belonging to one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Login email, stored lowercase.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    /// Company the user belongs to.
    pub company_id: CompanyId,
    /// Whether the email was verified.
    pub is_verified: bool,
    /// Platform role.
    pub role: UserRole,
    /// Access status.
    pub status: UserStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
