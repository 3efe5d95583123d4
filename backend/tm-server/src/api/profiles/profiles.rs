//! Profile REST API handlers

use crate::api::profiles::profile_input::{parse_experience_level, parse_role, validate_profile};
use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateProfileRequest, ProfileDto, ProfileListQuery,
    ProfileListResponse, ProfileResponse, UpdateProfileRequest,
};

use tm_core::ProfileFilter;
use tm_db::{DbError, ProfileRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use error_location::ErrorLocation;
use uuid::Uuid;

/// POST /api/v1/profile
pub async fn create_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateProfileRequest>,
) -> ApiResult<(StatusCode, Json<ProfileResponse>)> {
    let profile = req.into_profile(user.id, user.display_name())?;
    validate_profile(&profile, &state.validation)?;

    let repo = ProfileRepository::new(state.pool.clone());
    repo.create(&profile).await.map_err(|e| match e {
        DbError::Conflict { .. } => ApiError::Conflict {
            message: "profile already exists; use PUT to update it".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
        other => other.into(),
    })?;

    log::info!("Created profile {} for user {}", profile.id, user.id);

    Ok((
        StatusCode::CREATED,
        Json(ProfileResponse {
            profile: profile.into(),
        }),
    ))
}

/// GET /api/v1/profile
pub async fn get_own_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_user(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("You have not created a profile yet"))?;

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}

/// PUT /api/v1/profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let repo = ProfileRepository::new(state.pool.clone());
    let mut profile = repo
        .find_by_user(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("You have not created a profile yet"))?;

    req.apply(&mut profile)?;
    validate_profile(&profile, &state.validation)?;
    profile.updated_at = Utc::now();

    repo.update(&profile).await?;

    log::info!("Updated profile {}", profile.id);

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}

/// GET /api/v1/profiles
///
/// Ordered by display name, then user id.
pub async fn list_profiles(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<ProfileListQuery>,
) -> ApiResult<Json<ProfileListResponse>> {
    let filter = ProfileFilter {
        role: parse_role(query.role.as_deref())?,
        skill: query
            .skill
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        experience_level: parse_experience_level(query.experience.as_deref())?,
        exclude_user: query.exclude_self.then_some(user.id),
    };

    let profiles = ProfileRepository::new(state.pool.clone())
        .search(&filter)
        .await?;

    Ok(Json(ProfileListResponse {
        profiles: profiles.into_iter().map(ProfileDto::from).collect(),
    }))
}

/// GET /api/v1/profiles/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(_): AuthUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;

    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_user(user_uuid)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Profile for user {} not found", user_id)))?;

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}
