use crate::{AuthError, Claims, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{DecodingKey, Validation, decode};

/// Verifies access tokens signed by a `TokenIssuer` sharing the same secret
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: JwtAlgorithm,
    leeway_secs: u64,
}

impl JwtValidator {
    pub fn new(secret: &[u8], algorithm: JwtAlgorithm, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(algorithm.into());
        // Expiry is checked against an injectable clock in validate_at
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            algorithm,
            leeway_secs,
        }
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        self.validate_at(token, Utc::now())
    }

    /// Validate as if the current time were `now`.
    /// Accepted while `now < exp + leeway`.
    #[track_caller]
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        let deadline = claims.exp.saturating_add(self.leeway_secs as i64);
        if now.timestamp() >= deadline {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        self.algorithm.as_str()
    }
}
