//! Fixtures shared by the store integration tests.

#![allow(dead_code)]

use atrio_core::budget::{Budget, BudgetInput, BudgetItemInput, BudgetService, Client};
use atrio_core::company::{Company, CompanyService, NewCompany, User, UserStatus};
use atrio_core::plan::PlanLimits;
use atrio_shared::UserRole;
use atrio_shared::types::{CountryCode, UserId};
use chrono::Utc;
use rust_decimal_macros::dec;

pub fn company(name: &str) -> Company {
    CompanyService::create(
        NewCompany {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', "")),
            phone: "910000000".to_string(),
            country: CountryCode::PT,
        },
        Utc::now(),
    )
}

pub fn user(company: &Company, email: &str) -> User {
    User {
        id: UserId::new(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$stub$stub".to_string(),
        company_id: company.id,
        is_verified: true,
        role: UserRole::User,
        status: UserStatus::Active,
        created_at: Utc::now(),
    }
}

pub fn budget(company: &Company, client: &str) -> Budget {
    BudgetService::create(
        company,
        BudgetInput {
            client: Client {
                name: client.to_string(),
                ..Client::default()
            },
            items: vec![BudgetItemInput {
                id: None,
                description: "Alvenaria".to_string(),
                quantity: dec!(12),
                unit: Some("m2".to_string()),
                price_per_unit: dec!(45.5),
                category: None,
            }],
            notes: None,
            tax_rate: None,
            is_vat_enabled: None,
            valid_until: None,
            status: None,
        },
        &PlanLimits::default(),
        Utc::now(),
    )
    .expect("valid budget")
}
