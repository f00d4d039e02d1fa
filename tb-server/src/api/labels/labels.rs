//! Label REST API handlers
//!
//! Labels live on a board and attach to tasks on that board.

use crate::{
    ApiResult, AppState, CreateLabelRequest, CurrentUser, DeleteResponse, LabelDto,
    LabelListResponse, LabelResponse, services,
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

/// GET /api/boards/{id}/labels
pub async fn list_labels(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<LabelListResponse>> {
    let board_id = Uuid::parse_str(&id)?;

    let labels = services::boards::list_labels(&state.pool, board_id, user_id).await?;

    Ok(Json(LabelListResponse {
        labels: labels.into_iter().map(LabelDto::from).collect(),
    }))
}

/// POST /api/boards/{id}/labels
pub async fn create_label(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateLabelRequest>,
) -> ApiResult<impl IntoResponse> {
    let board_id = Uuid::parse_str(&id)?;

    let label =
        services::boards::create_label(&state.pool, board_id, user_id, request.name, request.color)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(LabelResponse {
            label: label.into(),
        }),
    ))
}

/// DELETE /api/labels/{id}
pub async fn delete_label(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let label_id = Uuid::parse_str(&id)?;

    services::boards::delete_label(&state.pool, label_id, user_id).await?;

    Ok(Json(DeleteResponse::new(label_id)))
}
