//! Integration tests for the repositories.

mod common;

use atrio_core::budget::{BudgetError, BudgetService, BudgetStatus};
use atrio_core::company::{User, UserStatus};
use atrio_core::notification::{NotificationInput, NotificationKind, NotificationService, NotificationTarget};
use atrio_db::{BudgetRepository, CompanyRepository, Database, NotificationRepository, StoreError, UserRepository};
use atrio_shared::AppError;
use atrio_shared::types::{BudgetId, CompanyId};
use chrono::{Duration, Utc};
use rstest::rstest;

#[test]
fn test_user_create_and_find() {
    let db = Database::new();
    let companies = CompanyRepository::new(db.clone());
    let users = UserRepository::new(db.clone());
    let company = companies.create(common::company("Obras Norte"));

    let user = users
        .create(common::user(&company, "ana@obrasnorte.pt"))
        .expect("Failed to create user");

    assert_eq!(users.find_by_id(user.id).map(|u| u.email), Some("ana@obrasnorte.pt".to_string()));
    assert_eq!(users.find_by_email(" ANA@ObrasNorte.pt ").map(|u| u.id), Some(user.id));
    assert!(users.email_exists("ana@obrasnorte.pt"));
    assert!(!users.email_exists("rui@obrasnorte.pt"));
}

#[test]
fn test_duplicate_email_is_conflict() {
    let db = Database::new();
    let users = UserRepository::new(db.clone());
    let company = common::company("Obras Sul");

    users.create(common::user(&company, "geral@sul.pt")).unwrap();
    let err = users.create(common::user(&company, "Geral@Sul.pt")).unwrap_err();

    assert!(matches!(err, StoreError::DuplicateEmail(_)));
    assert_eq!(AppError::from(err).status_code(), 409);
}

#[rstest]
#[case("ana@obrasnorte.pt")]
#[case(" ANA@ObrasNorte.pt ")]
#[case("Ana@obrasnorte.PT\t")]
fn test_find_by_email_ignores_case_and_padding(#[case] lookup: &str) {
    let db = Database::new();
    let users = UserRepository::new(db);
    let company = common::company("Obras Norte");
    let user = users.create(common::user(&company, "ana@obrasnorte.pt")).unwrap();

    assert_eq!(users.find_by_email(lookup).map(|u| u.id), Some(user.id));
    assert!(users.email_exists(lookup));
}

#[rstest]
#[case(UserStatus::Active)]
#[case(UserStatus::Suspended)]
fn test_user_status_is_stored(#[case] status: UserStatus) {
    let db = Database::new();
    let users = UserRepository::new(db);
    let company = common::company("Obras Este");
    let user = users
        .create(User {
            status,
            ..common::user(&company, "x@este.pt")
        })
        .unwrap();

    assert_eq!(users.find_by_id(user.id).unwrap().status, status);
}

#[test]
fn test_budgets_are_tenant_scoped() {
    let db = Database::new();
    let budgets = BudgetRepository::new(db.clone());
    let mine = common::company("Mine");
    let theirs = common::company("Theirs");

    let budget = budgets.insert(common::budget(&mine, "Cliente A"));
    budgets.insert(common::budget(&theirs, "Cliente B"));

    assert_eq!(budgets.list_for_company(mine.id).len(), 1);
    assert_eq!(budgets.list_for_company(theirs.id).len(), 1);
    assert!(budgets.find(mine.id, budget.id).is_ok());

    let err = budgets.find(theirs.id, budget.id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));

    let res: Result<_, AppError> = budgets.update(theirs.id, budget.id, |b| {
        b.notes = "hijacked".to_string();
        Ok(())
    });
    assert_eq!(res.unwrap_err().status_code(), 404);
    assert!(budgets.delete(theirs.id, budget.id).is_err());
    assert_eq!(budgets.find(mine.id, budget.id).unwrap().notes, "");
}

#[test]
fn test_failed_update_leaves_budget_unchanged() {
    let db = Database::new();
    let budgets = BudgetRepository::new(db);
    let company = common::company("Obras Oeste");
    let budget = budgets.insert(common::budget(&company, "Cliente"));

    let res: Result<((), _), AppError> = budgets.update(company.id, budget.id, |b| {
        BudgetService::set_status(b, BudgetStatus::Approved, Utc::now());
        Err(BudgetError::MissingClientName.into())
    });
    assert!(res.is_err());
    assert_eq!(budgets.find(company.id, budget.id).unwrap().status, BudgetStatus::Draft);

    let (_, saved) = budgets
        .update::<_, AppError>(company.id, budget.id, |b| {
            BudgetService::set_status(b, BudgetStatus::Approved, Utc::now());
            Ok(())
        })
        .unwrap();
    assert_eq!(saved.status, BudgetStatus::Approved);
}

#[test]
fn test_delete_budget() {
    let db = Database::new();
    let budgets = BudgetRepository::new(db);
    let company = common::company("Obras");
    let budget = budgets.insert(common::budget(&company, "Cliente"));

    assert_eq!(budgets.delete(company.id, budget.id).unwrap().id, budget.id);
    assert!(budgets.find(company.id, budget.id).is_err());
    assert!(budgets.delete(company.id, BudgetId::new()).is_err());
}

#[test]
fn test_company_update() {
    let db = Database::new();
    let companies = CompanyRepository::new(db);
    let company = companies.create(common::company("Obras"));

    let (_, saved) = companies
        .update::<_, AppError>(company.id, |c| {
            c.nif = "509999999".to_string();
            Ok(())
        })
        .unwrap();
    assert_eq!(saved.nif, "509999999");
    assert_eq!(companies.get(company.id).unwrap().nif, "509999999");
    assert!(companies.get(CompanyId::new()).is_err());
}

fn notice(created: chrono::DateTime<Utc>) -> atrio_core::notification::AppNotification {
    NotificationService::compose(
        NotificationInput {
            title: "Aviso".to_string(),
            message: "Nova funcionalidade".to_string(),
            target: NotificationTarget::All,
            kind: NotificationKind::Info,
            is_banner: false,
            banner_image: None,
        },
        created,
        72,
    )
    .unwrap()
}

#[test]
fn test_read_receipts() {
    let db = Database::new();
    let repo = NotificationRepository::new(db);
    let company = common::company("Obras");
    let user = common::user(&company, "a@obras.pt");
    let n = repo.insert(notice(Utc::now()));

    assert!(repo.mark_read(user.id, n.id));
    assert!(!repo.mark_read(user.id, n.id));
    assert!(repo.read_ids(user.id).contains(&n.id));

    repo.delete(n.id).unwrap();
    assert!(repo.read_ids(user.id).is_empty());
    assert!(repo.find_by_id(n.id).is_none());
    assert!(repo.delete(n.id).is_err());
}

#[test]
fn test_purge_expired() {
    let db = Database::new();
    let repo = NotificationRepository::new(db);
    repo.insert(notice(Utc::now() - Duration::days(5)));
    let live = repo.insert(notice(Utc::now()));

    assert_eq!(repo.purge_expired(Utc::now()), 1);
    let remaining: Vec<_> = repo.list().into_iter().map(|n| n.id).collect();
    assert_eq!(remaining, vec![live.id]);
}
