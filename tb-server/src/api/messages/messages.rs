//! Direct message REST API handlers

use crate::{
    ApiResult, AppState, CurrentUser, MessageDto, MessageListResponse, MessageResponse,
    SendMessageRequest, services,
};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<impl IntoResponse> {
    let recipient_id = Uuid::parse_str(&request.recipient_id)?;

    let message =
        services::messages::send(&state.pool, user_id, recipient_id, request.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: message.into(),
        }),
    ))
}

/// GET /api/messages/{user_id}
///
/// The conversation between the caller and the given user, oldest first
pub async fn get_conversation(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(peer_id): Path<String>,
) -> ApiResult<Json<MessageListResponse>> {
    let peer_id = Uuid::parse_str(&peer_id)?;

    let messages = services::messages::conversation(&state.pool, user_id, peer_id).await?;

    Ok(Json(MessageListResponse {
        messages: messages.into_iter().map(MessageDto::from).collect(),
    }))
}

/// PUT /api/messages/{id}/read
///
/// Recipient only.
pub async fn mark_read(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message_id = Uuid::parse_str(&id)?;

    let message = services::messages::mark_read(&state.pool, message_id, user_id).await?;

    Ok(Json(MessageResponse {
        message: message.into(),
    }))
}
