//! Current-account handlers

use crate::{
    ApiError, ApiResult, AppState, AuthUser, DeleteResponse, UpdateUserRequest, UserResponse,
};

use tm_core::validation;
use tm_db::UserRepository;

use axum::{Json, extract::State};
use chrono::Utc;

/// GET /api/v1/users/me
pub async fn get_me(AuthUser(user): AuthUser) -> ApiResult<Json<UserResponse>> {
    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/me
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(mut user): AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let max = state.validation.max_name_length;

    if let Some(first_name) = req.first_name {
        validation::validate_name("first_name", &first_name, max)?;
        user.first_name = first_name.trim().to_string();
    }
    if let Some(last_name) = req.last_name {
        validation::validate_name("last_name", &last_name, max)?;
        user.last_name = last_name.trim().to_string();
    }
    user.updated_at = Utc::now();

    UserRepository::new(state.pool.clone()).update(&user).await?;

    log::info!("Updated user {}", user.id);

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/users/me
///
/// Removes the profile, notifications and matches along with the account.
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = UserRepository::new(state.pool.clone())
        .delete(user.id)
        .await?;

    if !deleted {
        return Err(ApiError::not_found(format!("User {} not found", user.id)));
    }

    log::info!("Deleted user {}", user.id);

    Ok(Json(DeleteResponse {
        deleted_id: user.id.to_string(),
    }))
}
