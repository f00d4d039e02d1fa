//! Attachment REST API handlers
//!
//! Uploads are multipart; the file lands on disk and a metadata row is
//! written alongside it.

use crate::{
    ApiError, ApiResult, AppState, AttachmentDto, AttachmentListResponse, AttachmentResponse,
    CurrentUser, DeleteResponse, services,
};

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/tasks/{id}/attachments
pub async fn list_attachments(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AttachmentListResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let attachments = services::tasks::list_attachments(&state.pool, task_id, user_id).await?;

    Ok(Json(AttachmentListResponse {
        attachments: attachments.into_iter().map(AttachmentDto::from).collect(),
    }))
}

/// POST /api/tasks/{id}/attachments
///
/// Multipart upload, field name `file`.
pub async fn upload_attachment(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let task_id = Uuid::parse_str(&id)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .ok_or_else(|| ApiError::validation("File name is required"))?
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::validation(format!("Failed to read upload: {e}")))?;

        let attachment = services::tasks::add_attachment(
            &state.pool,
            &state.files,
            task_id,
            user_id,
            file_name,
            content_type,
            &bytes,
        )
        .await?;

        return Ok((
            StatusCode::CREATED,
            Json(AttachmentResponse {
                attachment: attachment.into(),
            }),
        ));
    }

    Err(ApiError::validation("Missing `file` field"))
}

/// DELETE /api/attachments/{id}
///
/// The uploader, or a board admin.
pub async fn delete_attachment(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let attachment_id = Uuid::parse_str(&id)?;

    services::tasks::delete_attachment(&state.pool, &state.files, attachment_id, user_id).await?;

    Ok(Json(DeleteResponse::new(attachment_id)))
}
