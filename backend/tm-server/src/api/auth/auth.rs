//! Account registration and login

use crate::{ApiError, ApiResult, AppState, LoginRequest, RegisterRequest, TokenResponse};

use tm_auth::password;
use tm_core::{User, validation};
use tm_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let limits = &state.validation;

    validation::validate_email(&req.email)?;
    validation::validate_password(&req.password, limits.min_password_length)?;
    validation::validate_name("first_name", &req.first_name, limits.max_name_length)?;
    validation::validate_name("last_name", &req.last_name, limits.max_name_length)?;

    let password_hash = password::hash_password(&req.password)?;
    let user = User::new(&req.email, password_hash, req.first_name, req.last_name);

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user).await.map_err(|e| match e {
        DbError::Conflict { .. } => ApiError::Conflict {
            message: "email is already registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
        other => other.into(),
    })?;

    let issued = state.token_issuer.issue(user.id)?;

    log::info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(TokenResponse::new(user, issued))))
}

/// POST /api/v1/auth/login
///
/// An unknown email and a wrong password produce the same 401 after the same
/// amount of argon2 work.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let email = User::normalize_email(&req.email);
    state.login_limiter.check(&email)?;

    let repo = UserRepository::new(state.pool.clone());
    let verified = match repo.find_by_email(&email).await? {
        Some(user) => password::verify_password(&req.password, &user.password_hash).then_some(user),
        None => {
            password::verify_dummy(&req.password);
            None
        }
    };
    let user = verified.ok_or_else(|| ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let issued = state.token_issuer.issue(user.id)?;

    log::info!("User {} logged in", user.id);

    Ok(Json(TokenResponse::new(user, issued)))
}
