#![allow(dead_code)]

//! Test infrastructure for tm-server API tests

use tm_auth::{JwtAlgorithm, JwtValidator, LoginRateLimiter, TokenIssuer};
use tm_config::ValidationConfig;
use tm_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes-min";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// In-memory database with migrations applied
pub async fn create_test_pool() -> sqlx::SqlitePool {
    tm_db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database")
}

pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_limiter(LoginRateLimiter::default()).await
}

pub async fn create_test_app_state_with_limiter(login_limiter: LoginRateLimiter) -> AppState {
    AppState {
        pool: create_test_pool().await,
        token_issuer: Arc::new(TokenIssuer::new(
            TEST_SECRET,
            JwtAlgorithm::HS256,
            chrono::Duration::minutes(60),
        )),
        jwt_validator: Arc::new(JwtValidator::new(TEST_SECRET, JwtAlgorithm::HS256, 0)),
        login_limiter: Arc::new(login_limiter),
        validation: ValidationConfig::default(),
    }
}

/// Send one request through a fresh router and decode the JSON body.
/// Non-JSON bodies come back as `Value::Null`.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// A registered account as seen by tests
pub struct TestUser {
    pub id: String,
    pub token: String,
}

pub async fn register(state: &AppState, email: &str, first: &str, last: &str) -> TestUser {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": TEST_PASSWORD,
            "first_name": first,
            "last_name": last,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);

    TestUser {
        id: json["user"]["id"].as_str().unwrap().to_string(),
        token: json["access_token"].as_str().unwrap().to_string(),
    }
}

pub async fn create_profile(state: &AppState, user: &TestUser, body: Value) -> Value {
    let (status, json) = send(state, "POST", "/api/v1/profile", Some(&user.token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create profile failed: {}", json);
    json["profile"].clone()
}

pub async fn express_interest(state: &AppState, sender: &TestUser, recipient: &TestUser) -> Value {
    let (status, json) = send(
        state,
        "POST",
        "/api/v1/notifications",
        Some(&sender.token),
        Some(json!({ "recipient_id": recipient.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "express interest failed: {}", json);
    json
}
