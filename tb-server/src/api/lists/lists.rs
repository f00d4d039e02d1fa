//! List REST API handlers
//!
//! Lists belong to a board; tasks are created through their list.

use crate::{
    ApiError, ApiResult, AppState, CreateListRequest, CreateTaskRequest, CurrentUser,
    DeleteResponse, ListCollectionResponse, ListDto, ListResponse, TaskDto, TaskListResponse,
    TaskResponse, UpdateListRequest, services,
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

/// GET /api/boards/{id}/lists
pub async fn list_lists(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ListCollectionResponse>> {
    let board_id = Uuid::parse_str(&id)?;

    let lists = services::lists::lists_for_board(&state.pool, board_id, user_id).await?;

    Ok(Json(ListCollectionResponse {
        lists: lists.into_iter().map(ListDto::from).collect(),
    }))
}

/// POST /api/boards/{id}/lists
pub async fn create_list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateListRequest>,
) -> ApiResult<impl IntoResponse> {
    let board_id = Uuid::parse_str(&id)?;

    let list = services::lists::create_list(
        &state.pool,
        board_id,
        user_id,
        request.title,
        request.position,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ListResponse { list: list.into() })))
}

/// PUT /api/lists/{id}
pub async fn update_list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateListRequest>,
) -> ApiResult<Json<ListResponse>> {
    let list_id = Uuid::parse_str(&id)?;

    let list = services::lists::update_list(
        &state.pool,
        list_id,
        user_id,
        request.title,
        request.position,
    )
    .await?;

    Ok(Json(ListResponse { list: list.into() }))
}

/// DELETE /api/lists/{id}
pub async fn delete_list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let list_id = Uuid::parse_str(&id)?;

    services::lists::delete_list(&state.pool, list_id, user_id).await?;

    Ok(Json(DeleteResponse::new(list_id)))
}

/// GET /api/lists/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskListResponse>> {
    let list_id = Uuid::parse_str(&id)?;

    let tasks = services::lists::tasks_for_list(&state.pool, list_id, user_id).await?;

    Ok(Json(TaskListResponse {
        tasks: tasks.into_iter().map(TaskDto::from).collect(),
    }))
}

/// POST /api/lists/{id}/tasks
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let list_id = Uuid::parse_str(&id)?;

    let due_date = request
        .due_date
        .map(|secs| {
            DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| ApiError::validation("Invalid due date timestamp"))
        })
        .transpose()?;
    let priority = request
        .priority
        .as_deref()
        .map(TaskPriority::from_str)
        .transpose()?;
    let status = request
        .status
        .as_deref()
        .map(TaskStatus::from_str)
        .transpose()?;

    let task = services::lists::create_task(
        &state.pool,
        list_id,
        user_id,
        request.title,
        request.description,
        due_date,
        priority,
        status,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse { task: task.into() })))
}
