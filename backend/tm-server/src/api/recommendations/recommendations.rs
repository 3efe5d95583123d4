use crate::{
    ApiError, ApiResult, AppState, AuthUser, RecommendationsQuery, RecommendationsResponse,
    RoleBucketDto,
};

use tm_core::{ProfileFilter, recommend, recommend::DEFAULT_BUCKET_LIMIT};
use tm_db::{NotificationRepository, ProfileRepository};

use std::collections::HashSet;
use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;

const MAX_BUCKET_LIMIT: usize = 100;

/// GET /api/v1/recommendations
///
/// Skips the caller and everyone the caller has already sent interest to.
pub async fn get_recommendations(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<RecommendationsQuery>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_BUCKET_LIMIT);
    if !(1..=MAX_BUCKET_LIMIT).contains(&limit) {
        return Err(ApiError::Validation {
            message: format!("limit must be between 1 and {}", MAX_BUCKET_LIMIT),
            field: Some("limit".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let profiles = ProfileRepository::new(state.pool.clone());
    let requester = profiles
        .find_by_user(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Create a profile to get recommendations"))?;

    let candidates = profiles
        .search(&ProfileFilter {
            exclude_user: Some(user.id),
            ..Default::default()
        })
        .await?;

    let contacted: HashSet<_> = NotificationRepository::new(state.pool.clone())
        .interest_recipients(user.id)
        .await?
        .into_iter()
        .collect();

    let buckets = recommend(&requester, &candidates, &contacted, limit);

    log::debug!(
        "Recommendations for {}: {} candidates, {} contacted",
        user.id,
        candidates.len(),
        contacted.len()
    );

    Ok(Json(RecommendationsResponse {
        buckets: buckets.into_iter().map(RoleBucketDto::from).collect(),
    }))
}
