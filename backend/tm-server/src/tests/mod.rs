mod api;
mod logger;

use crate::AppState;

use tm_auth::{JwtAlgorithm, JwtValidator, LoginRateLimiter, TokenIssuer};
use tm_config::ValidationConfig;

use std::sync::Arc;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-at-least-32-bytes-long";

pub(crate) async fn test_state() -> AppState {
    let pool = tm_db::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory database");

    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::new(
            TEST_SECRET,
            JwtAlgorithm::HS256,
            chrono::Duration::minutes(60),
        )),
        jwt_validator: Arc::new(JwtValidator::new(TEST_SECRET, JwtAlgorithm::HS256, 0)),
        login_limiter: Arc::new(LoginRateLimiter::default()),
        validation: ValidationConfig::default(),
    }
}
