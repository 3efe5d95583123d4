pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    matches::{match_dto::MatchDto, match_list_response::MatchListResponse, matches::list_matches},
    notifications::{
        create_notification_request::CreateNotificationRequest,
        express_interest_response::ExpressInterestResponse,
        notification_dto::NotificationDto,
        notification_list_query::NotificationListQuery,
        notification_list_response::NotificationListResponse,
        notification_response::NotificationResponse,
        notifications::{express_interest, list_notifications, mark_read},
    },
    profiles::{
        create_profile_request::CreateProfileRequest,
        profile_dto::ProfileDto,
        profile_list_query::ProfileListQuery,
        profile_list_response::ProfileListResponse,
        profile_response::ProfileResponse,
        profiles::{create_profile, get_own_profile, get_profile, list_profiles, update_profile},
        update_profile_request::UpdateProfileRequest,
    },
    recommendations::{
        recommendation_dto::{RecommendationDto, RoleBucketDto},
        recommendations::get_recommendations,
        recommendations_query::RecommendationsQuery,
        recommendations_response::RecommendationsResponse,
    },
    users::{
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{delete_me, get_me, update_me},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;
