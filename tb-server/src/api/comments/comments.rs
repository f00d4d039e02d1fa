//! Comment REST API handlers

use crate::{
    ApiResult, AppState, CommentDto, CommentListResponse, CommentResponse, CreateCommentRequest,
    CurrentUser, DeleteResponse, services,
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

/// GET /api/tasks/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let comments = services::tasks::list_comments(&state.pool, task_id, user_id).await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /api/tasks/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<impl IntoResponse> {
    let task_id = Uuid::parse_str(&id)?;

    let comment =
        services::tasks::add_comment(&state.pool, task_id, user_id, request.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            comment: comment.into(),
        }),
    ))
}

/// DELETE /api/comments/{id}
///
/// The author, or a board admin.
pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let comment_id = Uuid::parse_str(&id)?;

    services::tasks::delete_comment(&state.pool, comment_id, user_id).await?;

    Ok(Json(DeleteResponse::new(comment_id)))
}
