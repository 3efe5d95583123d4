use crate::tests::{TEST_SECRET, test_state};
use crate::{ApiError, AuthUser};

use tm_auth::{JwtAlgorithm, TokenIssuer};
use tm_core::User;
use tm_db::UserRepository;

use axum::extract::FromRequestParts;
use chrono::{Duration, Utc};
use http::{Request, request::Parts};

fn parts_with(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/users/me");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(()).unwrap().into_parts().0
}

async fn stored_user(state: &crate::AppState) -> User {
    let user = User::new(
        "ada@example.com",
        "$argon2id$placeholder".to_string(),
        "Ada".to_string(),
        "Lovelace".to_string(),
    );
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .unwrap();
    user
}

#[tokio::test]
async fn given_valid_token_when_extracting_then_returns_user() {
    let state = test_state().await;
    let user = stored_user(&state).await;
    let token = state.token_issuer.issue(user.id).unwrap().token;
    let mut parts = parts_with(Some(&format!("Bearer {}", token)));

    let AuthUser(found) = AuthUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(found.email, "ada@example.com");
}

#[tokio::test]
async fn given_no_header_when_extracting_then_unauthorized() {
    let state = test_state().await;
    let mut parts = parts_with(None);

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert_eq!(message, "missing authorization header")
        }
        _ => panic!("expected Unauthorized"),
    }
}

#[tokio::test]
async fn given_basic_scheme_when_extracting_then_unauthorized() {
    let state = test_state().await;
    let mut parts = parts_with(Some("Basic YWRhOnNlY3JldA=="));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracting_then_unauthorized() {
    let state = test_state().await;
    let user = stored_user(&state).await;
    let forger = TokenIssuer::new(
        b"another-secret-that-is-also-32-bytes-long",
        JwtAlgorithm::HS256,
        Duration::minutes(60),
    );
    let token = forger.issue(user.id).unwrap().token;
    let mut parts = parts_with(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => assert_eq!(message, "invalid token"),
        _ => panic!("expected Unauthorized"),
    }
}

#[tokio::test]
async fn given_expired_token_when_extracting_then_unauthorized() {
    let state = test_state().await;
    let user = stored_user(&state).await;
    let issuer = TokenIssuer::new(TEST_SECRET, JwtAlgorithm::HS256, Duration::minutes(60));
    let token = issuer
        .issue_at(user.id, Utc::now() - Duration::hours(2))
        .unwrap()
        .token;
    let mut parts = parts_with(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => assert_eq!(message, "token has expired"),
        _ => panic!("expected Unauthorized"),
    }
}

#[tokio::test]
async fn given_token_of_deleted_user_when_extracting_then_unauthorized() {
    let state = test_state().await;
    let user = stored_user(&state).await;
    let token = state.token_issuer.issue(user.id).unwrap().token;
    UserRepository::new(state.pool.clone())
        .delete(user.id)
        .await
        .unwrap();
    let mut parts = parts_with(Some(&format!("Bearer {}", token)));

    let result = AuthUser::from_request_parts(&mut parts, &state).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => {
            assert_eq!(message, "account no longer exists")
        }
        _ => panic!("expected Unauthorized"),
    }
}
