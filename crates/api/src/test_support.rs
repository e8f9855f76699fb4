//! In-process router helpers for handler tests.

use std::sync::Arc;

use atrio_core::analytics::AnalyticsCache;
use atrio_core::plan::PlanLimits;
use atrio_db::Database;
use atrio_shared::config::{AuthConfig, NotificationConfig};
use atrio_shared::JwtService;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{AppState, create_router};

pub const MASTER_EMAIL: &str = "owner@atrio.app";
pub const PASSWORD: &str = "correct-horse";

pub fn test_state() -> AppState {
    AppState {
        db: Database::new(),
        jwt_service: Arc::new(JwtService::new("test-secret-key-for-testing", 900)),
        plan_limits: PlanLimits::default(),
        auth_config: Arc::new(AuthConfig {
            master_emails: vec![MASTER_EMAIL.to_string()],
        }),
        notification_config: NotificationConfig::default(),
        analytics_cache: AnalyticsCache::new(),
    }
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

impl TestApp {
    pub fn new() -> Self {
        let state = test_state();
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(format!("/api/v1{uri}"));
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            text: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> TestResponse {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Registers an account and returns its bearer token.
    pub async fn register(&self, email: &str, company: &str) -> String {
        let res = self
            .request(
                Method::POST,
                "/auth/register",
                None,
                Some(json!({
                    "email": email,
                    "password": PASSWORD,
                    "company_name": company,
                    "phone": "910000000",
                    "country": "PT"
                })),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
        res.json()["access_token"].as_str().unwrap().to_string()
    }

    /// Creates a budget with one item and returns its ID.
    pub async fn create_budget(&self, token: &str, client: &str) -> String {
        let res = self
            .post(
                "/budgets",
                token,
                json!({
                    "client": { "name": client },
                    "items": [
                        { "description": "Reboco", "quantity": "10", "price_per_unit": "20" }
                    ],
                    "tax_rate": "23"
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.text);
        res.json()["id"].as_str().unwrap().to_string()
    }
}
