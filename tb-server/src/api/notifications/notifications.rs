//! Notification REST API handlers
//!
//! Notifications are per-recipient; only the recipient can read or mark
//! them.

use crate::{
    ApiResult, AppState, CurrentUser, MarkAllReadResponse, NotificationDto,
    NotificationListResponse, NotificationResponse, services,
};

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<NotificationListResponse>> {
    let notifications = services::notifications::list_for_user(&state.pool, user_id).await?;

    Ok(Json(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationDto::from)
            .collect(),
    }))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<NotificationResponse>> {
    let notification_id = Uuid::parse_str(&id)?;

    let notification =
        services::notifications::mark_read(&state.pool, notification_id, user_id).await?;

    Ok(Json(NotificationResponse {
        notification: notification.into(),
    }))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<MarkAllReadResponse>> {
    let updated = services::notifications::mark_all_read(&state.pool, user_id).await?;

    Ok(Json(MarkAllReadResponse { updated }))
}
