//! Checklist REST API handlers
//!
//! Checklists hang off tasks; items hang off checklists.

use crate::{
    ApiResult, AppState, ChecklistItemResponse, ChecklistListResponse, ChecklistResponse,
    ChecklistWithItemsDto, CreateChecklistItemRequest, CreateChecklistRequest, CurrentUser,
    DeleteResponse, UpdateChecklistItemRequest, services,
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

/// GET /api/tasks/{id}/checklists
pub async fn list_checklists(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ChecklistListResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let checklists = services::tasks::list_checklists(&state.pool, task_id, user_id).await?;

    Ok(Json(ChecklistListResponse {
        checklists: checklists
            .into_iter()
            .map(ChecklistWithItemsDto::from)
            .collect(),
    }))
}

/// POST /api/tasks/{id}/checklists
pub async fn create_checklist(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateChecklistRequest>,
) -> ApiResult<impl IntoResponse> {
    let task_id = Uuid::parse_str(&id)?;

    let checklist =
        services::tasks::create_checklist(&state.pool, task_id, user_id, request.title).await?;

    Ok((
        StatusCode::CREATED,
        Json(ChecklistResponse {
            checklist: checklist.into(),
        }),
    ))
}

/// DELETE /api/checklists/{id}
pub async fn delete_checklist(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let checklist_id = Uuid::parse_str(&id)?;

    services::tasks::delete_checklist(&state.pool, checklist_id, user_id).await?;

    Ok(Json(DeleteResponse::new(checklist_id)))
}

/// POST /api/checklists/{id}/items
pub async fn create_item(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<CreateChecklistItemRequest>,
) -> ApiResult<impl IntoResponse> {
    let checklist_id = Uuid::parse_str(&id)?;

    let item =
        services::tasks::create_checklist_item(&state.pool, checklist_id, user_id, request.content)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(ChecklistItemResponse { item: item.into() }),
    ))
}

/// PUT /api/checklist-items/{id}
///
/// Checking an item records who checked it and when; unchecking clears
/// both.
pub async fn update_item(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateChecklistItemRequest>,
) -> ApiResult<Json<ChecklistItemResponse>> {
    let item_id = Uuid::parse_str(&id)?;

    let item = services::tasks::update_checklist_item(
        &state.pool,
        item_id,
        user_id,
        request.content,
        request.position,
        request.is_checked,
    )
    .await?;

    Ok(Json(ChecklistItemResponse { item: item.into() }))
}

/// DELETE /api/checklist-items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let item_id = Uuid::parse_str(&id)?;

    services::tasks::delete_checklist_item(&state.pool, item_id, user_id).await?;

    Ok(Json(DeleteResponse::new(item_id)))
}
