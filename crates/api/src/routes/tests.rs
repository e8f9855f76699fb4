//! Handler tests driving the full router in-process.

use atrio_core::auth::hash_password;
use atrio_core::company::{User, UserStatus};
use atrio_db::{CompanyRepository, UserRepository};
use atrio_shared::{AppError, UserRole};
use atrio_shared::types::{CompanyId, UserId};
use axum::http::{Method, StatusCode, header};
use chrono::{Days, Utc};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use std::str::FromStr;

use crate::test_support::{MASTER_EMAIL, PASSWORD, TestApp};

fn amount(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().unwrap()).unwrap()
}

async fn ids(app: &TestApp, token: &str) -> (UserId, CompanyId) {
    let me = app.get("/me", token).await.json();
    (
        UserId::from_str(me["user"]["id"].as_str().unwrap()).unwrap(),
        CompanyId::from_str(me["company"]["id"].as_str().unwrap()).unwrap(),
    )
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let res = app.request(Method::GET, "/health", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "ok");
    assert_eq!(res.json()["store"]["companies"], 0);
}

#[rstest]
#[case("/me")]
#[case("/budgets")]
#[case("/dashboard")]
#[case("/analytics")]
#[case("/notifications")]
#[tokio::test]
async fn test_protected_routes_require_token(#[case] uri: &str) {
    let app = TestApp::new();

    let res = app.request(Method::GET, uri, None, None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app.get(uri, "not-a-token").await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_register_creates_free_company() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;

    let me = app.get("/me", &token).await;
    assert_eq!(me.status, StatusCode::OK);
    let body = me.json();
    assert_eq!(body["user"]["email"], "ana@obras.pt");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(body["company"]["name"], "Obras Ana");
    assert_eq!(body["company"]["plan"], "free");
    assert_eq!(body["company"]["effective_plan"], "free");
    assert_eq!(body["company"]["currency"], "EUR");
    assert_eq!(body["company"]["specialties"], json!(["masonry"]));
}

#[tokio::test]
async fn test_register_rejects_duplicates_and_bad_input() {
    let app = TestApp::new();
    app.register("ana@obras.pt", "Obras Ana").await;

    let dup = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "email": "ANA@obras.pt", "password": PASSWORD, "company_name": "Outra" })),
        )
        .await;
    assert_eq!(dup.status, StatusCode::CONFLICT);

    let short = app
        .request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "email": "rui@obras.pt", "password": "short", "company_name": "Rui" })),
        )
        .await;
    assert_eq!(short.status, StatusCode::BAD_REQUEST);
    assert_eq!(short.json()["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_master_email_gets_master_role() {
    let app = TestApp::new();
    let token = app.register(MASTER_EMAIL, "Atrio").await;

    let me = app.get("/me", &token).await.json();
    assert_eq!(me["user"]["role"], "master");
}

#[tokio::test]
async fn test_login() {
    let app = TestApp::new();
    app.register("ana@obras.pt", "Obras Ana").await;

    let ok = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "Ana@Obras.pt", "password": PASSWORD })),
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.json()["token_type"], "Bearer");
    assert_eq!(ok.json()["expires_in"], 900);

    let bad = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "ana@obras.pt", "password": "wrong-password" })),
        )
        .await;
    assert_eq!(bad.status, StatusCode::UNAUTHORIZED);

    let unknown = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "nobody@obras.pt", "password": PASSWORD })),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_suspended_user_is_refused() {
    let app = TestApp::new();
    let owner = app.register("ana@obras.pt", "Obras Ana").await;
    let (_, company_id) = ids(&app, &owner).await;

    let suspended = UserRepository::new(app.state.db.clone())
        .create(User {
            id: UserId::new(),
            email: "rui@obras.pt".to_string(),
            password_hash: hash_password(PASSWORD).unwrap(),
            company_id,
            is_verified: true,
            role: UserRole::User,
            status: UserStatus::Suspended,
            created_at: Utc::now(),
        })
        .unwrap();
    let token = app
        .state
        .jwt_service
        .issue(suspended.id.into_inner(), company_id.into_inner(), UserRole::User)
        .unwrap();

    assert_eq!(app.get("/budgets", &token).await.status, StatusCode::FORBIDDEN);
    assert_eq!(app.get("/budgets", &owner).await.status, StatusCode::OK);
    let login = app
        .request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "rui@obras.pt", "password": PASSWORD })),
        )
        .await;
    assert_eq!(login.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_oversized_amounts_are_rejected() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let huge = "100000000000000000000";

    let res = app
        .post(
            "/budgets",
            &token,
            json!({
                "client": { "name": "Maria" },
                "items": [{ "description": "Betão", "quantity": huge, "price_per_unit": huge }]
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["error"], "VALIDATION_ERROR");

    let id = app.create_budget(&token, "Maria").await;
    let payment = app
        .post(&format!("/budgets/{id}/payments"), &token, json!({ "amount": huge }))
        .await;
    assert_eq!(payment.status, StatusCode::BAD_REQUEST);
    let expense = app
        .post(
            &format!("/budgets/{id}/expenses"),
            &token,
            json!({ "description": "Cimento", "price_per_unit": huge }),
        )
        .await;
    assert_eq!(expense.status, StatusCode::BAD_REQUEST);

    let list = app.get("/budgets", &token).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.json()["meta"]["total"], 1);
    assert_eq!(app.get("/dashboard", &token).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_budget_lifecycle() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let id = app.create_budget(&token, "Maria Silva").await;

    let budget = app.get(&format!("/budgets/{id}"), &token).await.json();
    assert!(budget["number"].as_str().unwrap().starts_with("BGT-"));
    assert_eq!(budget["status"], "draft");
    assert_eq!(budget["items"][0]["category"], "masonry");
    assert_eq!(amount(&budget["totals"]["subtotal"]), dec!(200));
    assert_eq!(amount(&budget["totals"]["total"]), dec!(246));

    let res = app
        .put(&format!("/budgets/{id}/status"), &token, json!({ "status": "approved" }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["status"], "approved");

    let res = app
        .put(&format!("/budgets/{id}/status"), &token, json!({ "status": "archived" }))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let list = app.get("/budgets?status=approved&search=maria", &token).await.json();
    assert_eq!(list["meta"]["total"], 1);
    let list = app.get("/budgets?status=pending", &token).await.json();
    assert_eq!(list["meta"]["total"], 0);

    assert_eq!(app.delete(&format!("/budgets/{id}"), &token).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get(&format!("/budgets/{id}"), &token).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_budget_disables_vat() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let id = app.create_budget(&token, "Maria").await;

    let res = app
        .put(
            &format!("/budgets/{id}"),
            &token,
            json!({
                "client": { "name": "Maria Silva" },
                "items": [{ "description": "Pintura", "quantity": "4", "price_per_unit": "25.5" }],
                "is_vat_enabled": false
            }),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text);
    let body = res.json();
    assert_eq!(body["client"]["name"], "Maria Silva");
    assert_eq!(amount(&body["totals"]["tax"]), dec!(0));
    assert_eq!(amount(&body["totals"]["total"]), dec!(102.0));
}

#[tokio::test]
async fn test_budgets_are_isolated_between_companies() {
    let app = TestApp::new();
    let ana = app.register("ana@obras.pt", "Obras Ana").await;
    let rui = app.register("rui@casas.pt", "Casas Rui").await;
    let id = app.create_budget(&ana, "Cliente").await;

    assert_eq!(app.get(&format!("/budgets/{id}"), &rui).await.status, StatusCode::NOT_FOUND);
    let res = app
        .put(&format!("/budgets/{id}/status"), &rui, json!({ "status": "rejected" }))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(app.delete(&format!("/budgets/{id}"), &rui).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/budgets", &rui).await.json()["meta"]["total"], 0);

    let budget = app.get(&format!("/budgets/{id}"), &ana).await.json();
    assert_eq!(budget["status"], "draft");
}

#[tokio::test]
async fn test_free_plan_item_limit() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let id = app.create_budget(&token, "Cliente").await;
    let item = json!({ "description": "Tijolo", "quantity": "100", "price_per_unit": "0.5" });

    let second = app.post(&format!("/budgets/{id}/items"), &token, item.clone()).await;
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.json()["items"].as_array().unwrap().len(), 2);

    let third = app.post(&format!("/budgets/{id}/items"), &token, item.clone()).await;
    assert_eq!(third.status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(third.json()["error"], "UPGRADE_REQUIRED");

    app.post("/company/subscription/upgrade", &token, json!({})).await;
    let third = app.post(&format!("/budgets/{id}/items"), &token, item).await;
    assert_eq!(third.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_item_update_and_remove() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let id = app.create_budget(&token, "Cliente").await;
    let budget = app.get(&format!("/budgets/{id}"), &token).await.json();
    let item_id = budget["items"][0]["id"].as_str().unwrap().to_string();

    let res = app
        .put(&format!("/budgets/{id}/items/{item_id}"), &token, json!({ "quantity": "5" }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(amount(&res.json()["totals"]["subtotal"]), dec!(100));

    let res = app.delete(&format!("/budgets/{id}/items/{item_id}"), &token).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["items"].as_array().unwrap().len(), 0);

    let res = app.delete(&format!("/budgets/{id}/items/{item_id}"), &token).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payments() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let id = app.create_budget(&token, "Cliente").await;
    let uri = format!("/budgets/{id}/payments");

    let zero = app.post(&uri, &token, json!({ "amount": "0" })).await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    for amount in ["100", "46", "50"] {
        let res = app.post(&uri, &token, json!({ "amount": amount })).await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    }
    let fourth = app.post(&uri, &token, json!({ "amount": "1" })).await;
    assert_eq!(fourth.status, StatusCode::PAYMENT_REQUIRED);

    let summary = app.get(&uri, &token).await.json();
    assert_eq!(amount(&summary["paid"]), dec!(196));
    assert_eq!(amount(&summary["balance"]), dec!(50));
    assert_eq!(summary["payments"].as_array().unwrap().len(), 3);
    assert_eq!(summary["limit"]["allowed"], false);

    let payment_id = summary["payments"][0]["id"].as_str().unwrap().to_string();
    let res = app.delete(&format!("{uri}/{payment_id}"), &token).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["payments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_expenses_and_summary() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let id = app.create_budget(&token, "Cliente").await;
    let uri = format!("/budgets/{id}/expenses");

    let res = app
        .post(&uri, &token, json!({ "description": "Cimento", "quantity": "2", "price_per_unit": "23" }))
        .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
    let body = res.json();
    assert_eq!(amount(&body["costs"]), dec!(46));
    assert_eq!(amount(&body["profit"]), dec!(200));
    assert_eq!(body["expenses"][0]["unit"], "un");

    let expense_id = body["expenses"][0]["id"].as_str().unwrap().to_string();
    let res = app
        .put(&format!("{uri}/{expense_id}"), &token, json!({ "quantity": "1" }))
        .await;
    assert_eq!(amount(&res.json()["costs"]), dec!(23));

    let summary = app.get(&format!("/budgets/{id}/summary"), &token).await.json();
    assert_eq!(amount(&summary["revenue"]), dec!(246));
    assert_eq!(amount(&summary["profit"]), dec!(223));

    let res = app.delete(&format!("{uri}/{expense_id}"), &token).await;
    assert_eq!(amount(&res.json()["costs"]), dec!(0));
}

#[tokio::test]
async fn test_document_download() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras <Ana>").await;
    let id = app.create_budget(&token, "Maria & Filhos").await;
    let number = app.get(&format!("/budgets/{id}"), &token).await.json()["number"]
        .as_str()
        .unwrap()
        .to_string();

    let res = app.get(&format!("/budgets/{id}/document"), &token).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.headers[header::CONTENT_DISPOSITION],
        format!("attachment; filename=\"Orcamento_{number}.html\"").as_str()
    );
    assert!(res.headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(res.text.contains("Obras &lt;Ana&gt;"));
    assert!(res.text.contains("Maria &amp; Filhos"));
}

#[tokio::test]
async fn test_document_requires_items() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let res = app
        .post("/budgets", &token, json!({ "client": { "name": "Vazio" }, "items": [] }))
        .await;
    let id = res.json()["id"].as_str().unwrap().to_string();

    let res = app.get(&format!("/budgets/{id}/document"), &token).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let approved = app.create_budget(&token, "A").await;
    app.create_budget(&token, "B").await;
    app.put(&format!("/budgets/{approved}/status"), &token, json!({ "status": "approved" }))
        .await;
    app.post(&format!("/budgets/{approved}/payments"), &token, json!({ "amount": "46" }))
        .await;

    let body = app.get("/dashboard", &token).await.json();
    assert_eq!(amount(&body["total_approved"]), dec!(246));
    assert_eq!(amount(&body["total_pending"]), dec!(246));
    assert_eq!(amount(&body["total_paid"]), dec!(46));
    assert_eq!(amount(&body["balance"]), dec!(200));
    assert_eq!(body["counts"]["approved"], 1);
    assert_eq!(body["recent"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_analytics_requires_premium() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;

    let res = app.get("/analytics", &token).await;
    assert_eq!(res.status, StatusCode::PAYMENT_REQUIRED);
    assert!(res.json()["message"].as_str().unwrap().contains("analytics"));
}

#[tokio::test]
async fn test_analytics_cache_is_invalidated_by_writes() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    app.post("/company/subscription/upgrade", &token, json!({})).await;
    let id = app.create_budget(&token, "Cliente").await;

    let first = app.get("/analytics", &token).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["cached"], false);
    assert_eq!(amount(&first.json()["total_approved_revenue"]), dec!(0));

    let second = app.get("/analytics", &token).await.json();
    assert_eq!(second["cached"], true);

    app.put(&format!("/budgets/{id}/status"), &token, json!({ "status": "approved" }))
        .await;
    let third = app.get("/analytics", &token).await.json();
    assert_eq!(third["cached"], false);
    assert_eq!(amount(&third["total_approved_revenue"]), dec!(246));
    assert_eq!(amount(&third["conversion_rate"]), dec!(100));
}

#[tokio::test]
async fn test_expired_premium_is_free() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let (_, company_id) = ids(&app, &token).await;
    app.post("/company/subscription/upgrade", &token, json!({})).await;

    let yesterday = Utc::now().date_naive().checked_sub_days(Days::new(1));
    CompanyRepository::new(app.state.db.clone())
        .update::<_, AppError>(company_id, |c| {
            c.subscription_expires_on = yesterday;
            Ok(())
        })
        .unwrap();

    let sub = app.get("/company/subscription", &token).await.json();
    assert_eq!(sub["plan"], "premium");
    assert_eq!(sub["effective_plan"], "free");
    assert_eq!(sub["is_expired"], true);
    assert_eq!(app.get("/analytics", &token).await.status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn test_subscription_upgrade_and_downgrade() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;

    let free = app.get("/company/subscription", &token).await.json();
    assert_eq!(free["budget_limits"]["items"], 2);

    let premium = app.post("/company/subscription/upgrade", &token, json!({})).await.json();
    assert_eq!(premium["plan"], "premium");
    assert_eq!(premium["days_remaining"], 30);
    assert!(premium["budget_limits"]["items"].is_null());

    let back = app.post("/company/subscription/downgrade", &token, json!({})).await.json();
    assert_eq!(back["plan"], "free");
    assert!(back["expires_on"].is_null());
}

#[tokio::test]
async fn test_company_update_and_specialties() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;

    let res = app
        .put("/company", &token, json!({ "nif": "509999999", "address": "Rua A, Lisboa" }))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["nif"], "509999999");

    let res = app.post("/company/specialties/plumbing/toggle", &token, json!({})).await;
    assert_eq!(res.json()["selected"], true);
    let res = app.post("/company/specialties/electrical/toggle", &token, json!({})).await;
    assert_eq!(res.status, StatusCode::PAYMENT_REQUIRED);
    let res = app.post("/company/specialties/masonry/toggle", &token, json!({})).await;
    assert_eq!(res.json()["selected"], false);
    assert_eq!(res.json()["company"]["specialties"], json!(["plumbing"]));

    let res = app.post("/company/specialties/roofing/toggle", &token, json!({})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app
        .put("/company", &token, json!({ "specialties": ["drywall", "painting", "plumbing"] }))
        .await;
    assert_eq!(res.status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn test_notifications_publish_and_read() {
    let app = TestApp::new();
    let master = app.register(MASTER_EMAIL, "Atrio").await;
    let user = app.register("ana@obras.pt", "Obras Ana").await;

    let forbidden = app
        .post("/notifications", &user, json!({ "title": "Hi", "message": "There" }))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let all = app
        .post(
            "/notifications",
            &master,
            json!({ "title": "Novidades", "message": "Nova versão", "is_banner": true }),
        )
        .await;
    assert_eq!(all.status, StatusCode::CREATED, "{}", all.text);
    let all_id = all.json()["id"].as_str().unwrap().to_string();

    app.post(
        "/notifications",
        &master,
        json!({ "title": "Premium", "message": "Só premium", "target": "premium" }),
    )
    .await;

    let feed = app.get("/notifications", &user).await.json();
    assert_eq!(feed["notifications"].as_array().unwrap().len(), 1);
    assert_eq!(feed["unread_count"], 1);
    assert_eq!(feed["banner"]["id"], all_id.as_str());

    let res = app.post(&format!("/notifications/{all_id}/read"), &user, json!({})).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    let res = app.post(&format!("/notifications/{all_id}/read"), &user, json!({})).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let feed = app.get("/notifications", &user).await.json();
    assert_eq!(feed["unread_count"], 0);
    assert!(feed["banner"].is_null());
    assert_eq!(feed["notifications"][0]["is_read"], true);

    let master_feed = app.get("/notifications", &master).await.json();
    assert_eq!(master_feed["notifications"].as_array().unwrap().len(), 2);

    assert_eq!(
        app.delete(&format!("/notifications/{all_id}"), &user).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.delete(&format!("/notifications/{all_id}"), &master).await.status,
        StatusCode::NO_CONTENT
    );
    let res = app.post(&format!("/notifications/{all_id}/read"), &user, json!({})).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_renewal_reminder() {
    let app = TestApp::new();
    let token = app.register("ana@obras.pt", "Obras Ana").await;
    let (_, company_id) = ids(&app, &token).await;
    app.post("/company/subscription/upgrade", &token, json!({})).await;

    let soon = Utc::now().date_naive().checked_add_days(Days::new(2));
    CompanyRepository::new(app.state.db.clone())
        .update::<_, AppError>(company_id, |c| {
            c.subscription_expires_on = soon;
            Ok(())
        })
        .unwrap();

    let feed = app.get("/notifications", &token).await.json();
    let reminder = &feed["notifications"][0];
    assert_eq!(reminder["is_auto"], true);
    assert_eq!(reminder["kind"], "system");
    assert_eq!(feed["unread_count"], 1);

    let id = reminder["id"].as_str().unwrap().to_string();
    let res = app.post(&format!("/notifications/{id}/read"), &token, json!({})).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get("/notifications", &token).await.json()["unread_count"], 0);
}
