//! Demo data seeder for Atrio development and testing.
//!
//! Writes a snapshot with a Premium demo company, budgets across several
//! months and statuses, payments, expenses and a welcome broadcast.
//!
//! Usage: cargo run --bin seeder [snapshot-path]

use std::path::PathBuf;

use anyhow::Context;
use atrio_core::auth::hash_password;
use atrio_core::budget::{Budget, BudgetInput, BudgetItemInput, BudgetService, BudgetStatus, Client};
use atrio_core::company::{Company, CompanyService, NewCompany, Specialty, User, UserStatus};
use atrio_core::expense::{ExpenseInput, ExpenseService};
use atrio_core::notification::{NotificationInput, NotificationKind, NotificationService, NotificationTarget};
use atrio_core::payment::{PaymentInput, PaymentService};
use atrio_core::plan::{PlanLimits, SubscriptionService};
use atrio_db::{BudgetRepository, CompanyRepository, Database, NotificationRepository, UserRepository};
use atrio_shared::types::{CountryCode, UserId};
use atrio_shared::{AppConfig, UserRole};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

const DEMO_EMAIL: &str = "demo@atrio.app";
const DEMO_PASSWORD: &str = "demo-password";
const DEFAULT_SNAPSHOT: &str = "data/atrio.json";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .or_else(|| AppConfig::load().ok().and_then(|c| c.storage.snapshot_path))
        .map_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT), PathBuf::from);

    let db = Database::new();
    let limits = PlanLimits::default();
    let now = Utc::now();

    println!("Seeding demo company...");
    let company = seed_company(&db, &limits, now)?;

    println!("Seeding demo user...");
    seed_user(&db, &company, now)?;

    println!("Seeding budgets...");
    let count = seed_budgets(&db, &company, &limits, now)?;
    println!("  Inserted {count} budgets");

    println!("Seeding notifications...");
    seed_notification(&db, now)?;

    db.save_snapshot(&path)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
    println!("Seeding complete! Snapshot written to {}", path.display());
    println!("  Sign in with {DEMO_EMAIL} / {DEMO_PASSWORD}");
    Ok(())
}

fn seed_company(db: &Database, limits: &PlanLimits, now: DateTime<Utc>) -> anyhow::Result<Company> {
    let mut company = CompanyService::create(
        NewCompany {
            name: "Construções Demo, Lda".to_string(),
            email: DEMO_EMAIL.to_string(),
            phone: "+351 210 000 000".to_string(),
            country: CountryCode::PT,
        },
        now,
    );
    company.nif = "509000000".to_string();
    company.address = "Avenida da Liberdade 1, Lisboa".to_string();
    company.specialties = vec![
        Specialty::Masonry,
        Specialty::ExternalInsulation,
        Specialty::Painting,
    ];
    SubscriptionService::upgrade(&mut company, limits, now.date_naive());

    let company = CompanyRepository::new(db.clone()).create(company);
    println!("  Created company: {}", company.name);
    Ok(company)
}

fn seed_user(db: &Database, company: &Company, now: DateTime<Utc>) -> anyhow::Result<()> {
    let user = UserRepository::new(db.clone()).create(User {
        id: UserId::new(),
        email: DEMO_EMAIL.to_string(),
        password_hash: hash_password(DEMO_PASSWORD)?,
        company_id: company.id,
        is_verified: true,
        role: UserRole::Master,
        status: UserStatus::Active,
        created_at: now,
    })?;
    println!("  Created user: {}", user.email);
    Ok(())
}

fn item(description: &str, quantity: i64, unit: &str, price_cents: i64, category: Specialty) -> BudgetItemInput {
    BudgetItemInput {
        id: None,
        description: description.to_string(),
        quantity: Decimal::from(quantity),
        unit: Some(unit.to_string()),
        price_per_unit: Decimal::new(price_cents, 2),
        category: Some(category),
    }
}

fn seed_budgets(
    db: &Database,
    company: &Company,
    limits: &PlanLimits,
    now: DateTime<Utc>,
) -> anyhow::Result<usize> {
    let repo = BudgetRepository::new(db.clone());
    let plans: [(&str, i64, BudgetStatus, Vec<BudgetItemInput>); 5] = [
        (
            "Maria Silva",
            95,
            BudgetStatus::Approved,
            vec![
                item("Parede de alvenaria", 40, "m2", 3_850, Specialty::Masonry),
                item("Pintura interior", 120, "m2", 850, Specialty::Painting),
            ],
        ),
        (
            "Condomínio Sol Nascente",
            62,
            BudgetStatus::Approved,
            vec![item("Sistema ETICS fachada", 310, "m2", 4_200, Specialty::ExternalInsulation)],
        ),
        (
            "João Ferreira",
            33,
            BudgetStatus::Rejected,
            vec![item("Reboco exterior", 80, "m2", 1_900, Specialty::Masonry)],
        ),
        (
            "Ana Costa",
            12,
            BudgetStatus::Approved,
            vec![
                item("Pintura exterior", 150, "m2", 1_100, Specialty::Painting),
                item("Andaimes", 1, "vg", 95_000, Specialty::Other),
            ],
        ),
        (
            "Pedro Martins",
            2,
            BudgetStatus::Draft,
            vec![item("Muro de vedação", 25, "ml", 6_500, Specialty::Masonry)],
        ),
    ];

    let mut count = 0;
    for (client, days_ago, status, items) in plans {
        let issued = now - Duration::days(days_ago);
        let mut budget = BudgetService::create(
            company,
            BudgetInput {
                client: Client {
                    name: client.to_string(),
                    ..Client::default()
                },
                items,
                notes: Some("Preços válidos para execução no prazo indicado.".to_string()),
                tax_rate: None,
                is_vat_enabled: None,
                valid_until: None,
                status: Some(status),
            },
            limits,
            issued,
        )?;

        if status == BudgetStatus::Approved {
            add_progress(&mut budget, company, limits, issued)?;
        }
        repo.insert(budget);
        count += 1;
    }
    Ok(count)
}

fn add_progress(
    budget: &mut Budget,
    company: &Company,
    limits: &PlanLimits,
    issued: DateTime<Utc>,
) -> anyhow::Result<()> {
    let advance = (budget.total() * Decimal::new(30, 2)).round_dp(2);
    let materials = (budget.total() * Decimal::new(35, 2)).round_dp(2);
    PaymentService::record(
        budget,
        company,
        PaymentInput {
            amount: advance,
            date: Some(issued.date_naive()),
            proof_base64: None,
            proof_file_name: None,
            notes: Some("Adjudicação".to_string()),
        },
        limits,
        issued,
    )?;
    ExpenseService::add(
        budget,
        company,
        ExpenseInput {
            description: Some("Materiais".to_string()),
            unit: Some("vg".to_string()),
            quantity: Some(Decimal::ONE),
            price_per_unit: Some(materials),
        },
        limits,
        issued,
    )?;
    Ok(())
}

fn seed_notification(db: &Database, now: DateTime<Utc>) -> anyhow::Result<()> {
    let notification = NotificationService::compose(
        NotificationInput {
            title: "Bem-vindo ao Átrio".to_string(),
            message: "Crie o seu primeiro orçamento em poucos minutos.".to_string(),
            target: NotificationTarget::All,
            kind: NotificationKind::Info,
            is_banner: true,
            banner_image: None,
        },
        now,
        72,
    )?;
    NotificationRepository::new(db.clone()).insert(notification);
    Ok(())
}
