//! Task REST API handlers
//!
//! Task detail, updates, moves, assignees and label attachment.

use crate::{
    AddAssigneeRequest, ApiError, ApiResult, AppState, AssigneeResponse, CurrentUser,
    DeleteResponse, MoveTaskRequest, TaskDetailResponse, TaskResponse, UpdateTaskRequest,
    services::{self, tasks::TaskUpdate},
};

use tb_core::{TaskPriority, TaskStatus};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::DateTime;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/tasks/{id}
///
/// The task with assignees, labels, comments, checklists and attachments
pub async fn get_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskDetailResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let detail = services::tasks::get_detail(&state.pool, task_id, user_id).await?;

    Ok(Json(detail.into()))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let update = TaskUpdate {
        title: request.title,
        description: request.description,
        due_date: request
            .due_date
            .map(|secs| {
                DateTime::from_timestamp(secs, 0)
                    .ok_or_else(|| ApiError::validation("Invalid due date timestamp"))
            })
            .transpose()?,
        priority: request
            .priority
            .as_deref()
            .map(TaskPriority::from_str)
            .transpose()?,
        status: request
            .status
            .as_deref()
            .map(TaskStatus::from_str)
            .transpose()?,
    };

    let task = services::tasks::update_task(&state.pool, task_id, user_id, update).await?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    services::tasks::delete_task(&state.pool, task_id, user_id).await?;

    Ok(Json(DeleteResponse::new(task_id)))
}

/// POST /api/tasks/{id}/move
///
/// Re-parents the task onto another list of the same board, appending it
/// at the end.
pub async fn move_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<MoveTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let target_list_id = Uuid::parse_str(&request.list_id)?;

    let task = services::tasks::move_task(&state.pool, task_id, user_id, target_list_id).await?;

    Ok(Json(TaskResponse { task: task.into() }))
}

/// POST /api/tasks/{id}/assignees
pub async fn add_assignee(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<AddAssigneeRequest>,
) -> ApiResult<impl IntoResponse> {
    let task_id = Uuid::parse_str(&id)?;
    let assignee_id = Uuid::parse_str(&request.user_id)?;

    let assignee =
        services::tasks::add_assignee(&state.pool, task_id, user_id, assignee_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AssigneeResponse {
            assignee: assignee.into(),
        }),
    ))
}

/// DELETE /api/tasks/{id}/assignees/{user_id}
pub async fn remove_assignee(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((id, assignee_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let assignee_id = Uuid::parse_str(&assignee_id)?;

    services::tasks::remove_assignee(&state.pool, task_id, user_id, assignee_id).await?;

    Ok(Json(DeleteResponse::new(assignee_id)))
}

/// PUT /api/tasks/{id}/labels/{label_id}
pub async fn attach_label(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((id, label_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let task_id = Uuid::parse_str(&id)?;
    let label_id = Uuid::parse_str(&label_id)?;

    services::tasks::attach_label(&state.pool, task_id, user_id, label_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/tasks/{id}/labels/{label_id}
pub async fn detach_label(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((id, label_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let label_id = Uuid::parse_str(&label_id)?;

    services::tasks::detach_label(&state.pool, task_id, user_id, label_id).await?;

    Ok(Json(DeleteResponse::new(label_id)))
}
