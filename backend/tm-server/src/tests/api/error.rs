use crate::ApiError;

use tm_auth::AuthError;
use tm_core::CoreError;
use tm_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Profile not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Profile not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "first_name is required".into(),
        field: Some("first_name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "first_name");
}

#[tokio::test]
async fn test_invalid_credentials_hides_which_part_was_wrong() {
    let error = ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "invalid email or password");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "not yours".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core = CoreError::Validation {
        field: "discord_link".into(),
        message: "must start with http:// or https://".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = core.into();

    assert_eq!(api.status(), StatusCode::BAD_REQUEST);
    match api {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("discord_link")),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_invalid_role_maps_to_validation_error() {
    let core = CoreError::InvalidRole {
        value: "designer".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = core.into();

    assert_eq!(api.code(), "VALIDATION_ERROR");
    assert!(api.to_string().contains("designer"));
}

#[test]
fn test_expired_token_maps_to_unauthorized() {
    let auth = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = auth.into();

    assert_eq!(api.status(), StatusCode::UNAUTHORIZED);
    match api {
        ApiError::Unauthorized { message, .. } => assert_eq!(message, "token has expired"),
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[test]
fn test_rate_limit_maps_to_429() {
    let auth = AuthError::RateLimitExceeded {
        limit: 10,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = auth.into();

    assert_eq!(api.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(api.code(), "RATE_LIMITED");
}

#[test]
fn test_db_conflict_maps_to_409() {
    let db = DbError::Conflict {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api: ApiError = db.into();

    assert_eq!(api.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_db_internal_error_does_not_leak_details() {
    let db = DbError::corrupt("bad uuid in users.id: not-a-uuid");

    let (status, json) = body_json(db.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn test_uuid_error_maps_to_validation() {
    let err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    let api: ApiError = err.into();

    assert_eq!(api.code(), "VALIDATION_ERROR");
}
