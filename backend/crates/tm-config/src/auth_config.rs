use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_JWT_ALGORITHM, DEFAULT_TOKEN_EXPIRE_MINUTES,
    MAX_LEEWAY_SECS, MAX_TOKEN_EXPIRE_MINUTES, MIN_SECRET_KEY_LENGTH, MIN_TOKEN_EXPIRE_MINUTES,
    SUPPORTED_JWT_ALGORITHMS,
};

use serde::Deserialize;

/// Token signing settings. There is no default secret; startup fails without one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub secret_key: Option<String>,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
    /// Clock skew tolerance applied when checking expiry
    pub leeway_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            algorithm: String::from(DEFAULT_JWT_ALGORITHM),
            access_token_expire_minutes: DEFAULT_TOKEN_EXPIRE_MINUTES,
            leeway_secs: 0,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = self.secret_key.as_deref() else {
            return Err(ConfigError::auth(
                "auth.secret_key is required (set TM_AUTH_SECRET_KEY)",
            ));
        };

        if secret.len() < MIN_SECRET_KEY_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.secret_key must be at least {} characters",
                MIN_SECRET_KEY_LENGTH
            )));
        }

        let algorithm = self.algorithm.trim().to_uppercase();
        if !SUPPORTED_JWT_ALGORITHMS.contains(&algorithm.as_str()) {
            return Err(ConfigError::auth(format!(
                "auth.algorithm must be one of {:?}, got '{}'",
                SUPPORTED_JWT_ALGORITHMS, self.algorithm
            )));
        }

        if self.access_token_expire_minutes < MIN_TOKEN_EXPIRE_MINUTES
            || self.access_token_expire_minutes > MAX_TOKEN_EXPIRE_MINUTES
        {
            return Err(ConfigError::auth(format!(
                "auth.access_token_expire_minutes must be {}-{}, got {}",
                MIN_TOKEN_EXPIRE_MINUTES, MAX_TOKEN_EXPIRE_MINUTES, self.access_token_expire_minutes
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        Ok(())
    }
}
