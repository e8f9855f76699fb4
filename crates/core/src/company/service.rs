//! Company profile operations.

use atrio_shared::types::CompanyId;
use chrono::{DateTime, NaiveDate, Utc};

use super::error::CompanyError;
use super::types::{Company, CompanyUpdate, NewCompany, Specialty};
use crate::plan::{PlanLimits, PlanType, Resource, SubscriptionService};

/// Company service for profile and specialty management.
pub struct CompanyService;

impl CompanyService {
    /// Opens a new Free company with the Masonry specialty.
    #[must_use]
    pub fn create(input: NewCompany, now: DateTime<Utc>) -> Company {
        Company {
            id: CompanyId::new(),
            name: input.name.trim().to_string(),
            logo: String::new(),
            nif: String::new(),
            address: String::new(),
            email: input.email.trim().to_lowercase(),
            phone: input.phone.trim().to_string(),
            website: None,
            specialties: vec![Specialty::Masonry],
            plan: PlanType::Free,
            country: input.country,
            subscription_expires_on: None,
            created_at: now,
        }
    }

    /// Applies a partial profile update.
    ///
    /// The update is validated as a whole before anything is changed.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name, malformed email or logo,
    /// and `CompanyError::Plan` when the specialty list exceeds the plan.
    pub fn apply_update(
        company: &mut Company,
        update: CompanyUpdate,
        limits: &PlanLimits,
        today: NaiveDate,
    ) -> Result<(), CompanyError> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(CompanyError::EmptyName);
            }
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }
        if let Some(logo) = &update.logo {
            if !logo.is_empty() && !logo.starts_with("data:image/") {
                return Err(CompanyError::InvalidLogo);
            }
        }
        let specialties = update
            .specialties
            .map(|list| Self::normalize_specialties(company, list, limits, today))
            .transpose()?;

        if let Some(name) = update.name {
            company.name = name.trim().to_string();
        }
        if let Some(logo) = update.logo {
            company.logo = logo;
        }
        if let Some(nif) = update.nif {
            company.nif = nif.trim().to_string();
        }
        if let Some(address) = update.address {
            company.address = address.trim().to_string();
        }
        if let Some(email) = update.email {
            company.email = email.trim().to_lowercase();
        }
        if let Some(phone) = update.phone {
            company.phone = phone.trim().to_string();
        }
        if let Some(website) = update.website {
            let website = website.trim();
            company.website = (!website.is_empty()).then(|| website.to_string());
        }
        if let Some(specialties) = specialties {
            company.specialties = specialties;
        }
        if let Some(country) = update.country {
            company.country = country;
        }

        Ok(())
    }

    /// Removes the specialty if selected, otherwise adds it.
    ///
    /// Returns true when the specialty was added.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::Plan` when adding would exceed the plan.
    pub fn toggle_specialty(
        company: &mut Company,
        specialty: Specialty,
        limits: &PlanLimits,
        today: NaiveDate,
    ) -> Result<bool, CompanyError> {
        if let Some(pos) = company.specialties.iter().position(|s| *s == specialty) {
            company.specialties.remove(pos);
            return Ok(false);
        }

        let plan = SubscriptionService::effective_plan(company, today);
        limits.ensure_can_add(plan, Resource::Specialties, company.specialties.len())?;
        company.specialties.push(specialty);
        Ok(true)
    }

    fn normalize_specialties(
        company: &Company,
        list: Vec<Specialty>,
        limits: &PlanLimits,
        today: NaiveDate,
    ) -> Result<Vec<Specialty>, CompanyError> {
        let mut unique = Vec::with_capacity(list.len());
        for specialty in list {
            if !unique.contains(&specialty) {
                unique.push(specialty);
            }
        }

        let plan = SubscriptionService::effective_plan(company, today);
        limits.ensure_within(plan, Resource::Specialties, unique.len())?;
        Ok(unique)
    }
}

/// Minimal plausibility check for an email address.
///
/// # Errors
///
/// Returns `CompanyError::InvalidEmail` when the address has no local part,
/// no `@`, or no dot in the domain.
pub fn validate_email(email: &str) -> Result<(), CompanyError> {
    let email = email.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        });

    if valid {
        Ok(())
    } else {
        Err(CompanyError::InvalidEmail(email.to_string()))
    }
}
