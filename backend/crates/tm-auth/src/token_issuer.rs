use crate::{AuthError, Claims, JwtAlgorithm, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

/// A freshly signed access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs access tokens with a shared secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: JwtAlgorithm,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], algorithm: JwtAlgorithm, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm,
            ttl,
        }
    }

    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    #[track_caller]
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> AuthErrorResult<IssuedToken> {
        let expires_at = now + self.ttl;
        let claims = Claims::new(user_id, now.timestamp(), expires_at.timestamp());

        let token = encode(
            &Header::new(self.algorithm.into()),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(IssuedToken { token, expires_at })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn algorithm(&self) -> JwtAlgorithm {
        self.algorithm
    }
}
