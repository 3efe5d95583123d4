//! Interest notifications and match confirmation

use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateNotificationRequest, ExpressInterestResponse,
    NotificationDto, NotificationListQuery, NotificationListResponse, NotificationResponse,
};

use tm_core::{Notification, TeamMatch, validation};
use tm_db::{DbError, NotificationRepository, UserRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// POST /api/v1/notifications
///
/// Records the caller's interest in the recipient. When the recipient has
/// already sent interest the other way, the match and a confirmation for each
/// side are written in the same transaction as the interest.
pub async fn express_interest(
    State(state): State<AppState>,
    AuthUser(sender): AuthUser,
    Json(req): Json<CreateNotificationRequest>,
) -> ApiResult<(StatusCode, Json<ExpressInterestResponse>)> {
    let recipient_id = Uuid::parse_str(req.recipient_id.trim()).map_err(|e| ApiError::Validation {
        message: format!("Invalid UUID format: {}", e),
        field: Some("recipient_id".into()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    validation::validate_optional_text(
        "message",
        req.message.as_deref(),
        state.validation.max_text_length,
    )?;
    let message = req
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| Notification::default_interest_message(&sender.display_name()));

    // Rejects self-interest before the recipient lookup
    let notification = Notification::interest(sender.id, recipient_id, message)?;

    let recipient = UserRepository::new(state.pool.clone())
        .find_by_id(recipient_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", recipient_id)))?;

    let team_match = TeamMatch::new(sender.id, recipient.id)?;
    let confirmations = [
        Notification::match_confirmed(
            sender.id,
            recipient.id,
            Notification::default_match_message(&sender.display_name()),
        )?,
        Notification::match_confirmed(
            recipient.id,
            sender.id,
            Notification::default_match_message(&recipient.display_name()),
        )?,
    ];

    let matched = NotificationRepository::new(state.pool.clone())
        .record_interest(&notification, &team_match, &confirmations)
        .await
        .map_err(|e| match e {
            DbError::Conflict { .. } => already_interested(recipient.id),
            other => other.into(),
        })?;

    log::info!("User {} expressed interest in {}", sender.id, recipient.id);
    if matched {
        log::info!("Match confirmed between {} and {}", sender.id, recipient.id);
    }

    Ok((
        StatusCode::CREATED,
        Json(ExpressInterestResponse {
            notification: notification.into(),
            matched,
        }),
    ))
}

/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<NotificationListQuery>,
) -> ApiResult<Json<NotificationListResponse>> {
    let notifications = NotificationRepository::new(state.pool.clone())
        .find_for_recipient(user.id, query.unread_only)
        .await?;

    Ok(Json(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationDto::from)
            .collect(),
    }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Only the recipient may mark a notification read. Marking twice is a no-op.
pub async fn mark_read(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<Json<NotificationResponse>> {
    let notification_uuid = Uuid::parse_str(&notification_id)?;

    let repo = NotificationRepository::new(state.pool.clone());
    let mut notification = repo
        .find_by_id(notification_uuid)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("Notification {} not found", notification_id))
        })?;

    if notification.recipient_id != user.id {
        return Err(ApiError::Forbidden {
            message: "only the recipient can mark a notification read".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !notification.is_read {
        repo.mark_read(notification.id).await?;
        notification.is_read = true;
    }

    Ok(Json(NotificationResponse {
        notification: notification.into(),
    }))
}

#[track_caller]
fn already_interested(recipient: Uuid) -> ApiError {
    ApiError::Conflict {
        message: format!("You have already expressed interest in user {}", recipient),
        location: ErrorLocation::from(Location::caller()),
    }
}
