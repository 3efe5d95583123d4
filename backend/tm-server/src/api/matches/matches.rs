use crate::{ApiResult, AppState, AuthUser, MatchDto, MatchListResponse};

use tm_db::{MatchRepository, ProfileRepository, UserRepository};

use axum::{Json, extract::State};

/// GET /api/v1/matches
pub async fn list_matches(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<MatchListResponse>> {
    let team_matches = MatchRepository::new(state.pool.clone())
        .find_for_user(user.id)
        .await?;

    let users = UserRepository::new(state.pool.clone());
    let profiles = ProfileRepository::new(state.pool.clone());

    let mut matches = Vec::with_capacity(team_matches.len());
    for team_match in team_matches {
        let Some(partner_id) = team_match.other(user.id) else {
            continue;
        };
        // Cascading deletes remove the match together with the account
        let Some(partner) = users.find_by_id(partner_id).await? else {
            log::warn!("Match {} <-> {} has no partner account", user.id, partner_id);
            continue;
        };
        let profile = profiles.find_by_user(partner_id).await?;

        matches.push(MatchDto {
            user_id: partner.id.to_string(),
            display_name: partner.display_name(),
            email: partner.email,
            matched_at: team_match.created_at.timestamp(),
            profile: profile.map(Into::into),
        });
    }

    Ok(Json(MatchListResponse { matches }))
}
