//! Shared state handed to every handler.

use crate::error::{Result as ServerErrorResult, ServerError};

use tm_auth::{JwtAlgorithm, JwtValidator, LoginRateLimiter, RateLimitConfig, TokenIssuer};
use tm_config::{Config, ValidationConfig};

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    /// Keyed by normalised email
    pub login_limiter: Arc<LoginRateLimiter>,
    pub validation: ValidationConfig,
}

impl AppState {
    /// Build the auth components from a validated configuration
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .secret_key
            .as_deref()
            .ok_or(ServerError::MissingSecret)?;
        let algorithm = JwtAlgorithm::from_str(&config.auth.algorithm)?;
        let ttl = chrono::Duration::minutes(config.auth.access_token_expire_minutes);

        let login_limiter = LoginRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.login_max_requests,
            window_secs: config.rate_limit.login_window_secs,
        });

        Ok(Self {
            pool,
            token_issuer: Arc::new(TokenIssuer::new(secret.as_bytes(), algorithm, ttl)),
            jwt_validator: Arc::new(JwtValidator::new(
                secret.as_bytes(),
                algorithm,
                config.auth.leeway_secs,
            )),
            login_limiter: Arc::new(login_limiter),
            validation: config.validation.clone(),
        })
    }
}
