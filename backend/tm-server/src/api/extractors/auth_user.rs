//! Bearer-token authentication for protected routes

use crate::{ApiError, AppState};

use tm_core::User;
use tm_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use http::header::AUTHORIZATION;

/// The account behind a valid `Authorization: Bearer <token>` header.
///
/// Rejects with 401 when the header is missing or malformed, the token does
/// not verify or has expired, or the account it names no longer exists.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = match parts.headers.get(AUTHORIZATION) {
                Some(value) => Some(value.to_str().map_err(|_| ApiError::Unauthorized {
                    message: "authorization header is not valid text".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?),
                None => None,
            };

            let token = tm_auth::bearer_token(header)?;
            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;

            let user = UserRepository::new(state.pool.clone())
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| ApiError::Unauthorized {
                    message: "account no longer exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            log::debug!("Authenticated user {}", user.id);
            Ok(AuthUser(user))
        }
    }
}
