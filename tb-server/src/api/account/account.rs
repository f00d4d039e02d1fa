//! Account REST API handlers
//!
//! Registration, login and profile photo upload.

use crate::{
    ApiError, ApiResult, AppState, CurrentUser, LoginRequest, LoginResponse, RegisterRequest,
    UserDto, UserResponse,
    services::{self, files::FilePurpose},
};

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/account/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.username.trim().is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(ApiError::validation("A valid email address is required"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }

    let new_user = services::auth::NewUser {
        username: request.username.trim().to_string(),
        email: request.email.trim().to_string(),
        password: request.password,
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
    };

    match services::auth::register(&state.pool, new_user).await? {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(UserResponse { user: user.into() }),
        )),
        Err(failure) => Err(ApiError::validation(failure.message())),
    }
}

/// POST /api/account/login
///
/// All login failures collapse to the same 401 so the response does not
/// reveal which part of the credentials was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    match services::auth::login(&state.pool, &state.issuer, &request.email, &request.password)
        .await?
    {
        Ok((token, user)) => Ok(Json(LoginResponse {
            token,
            user: user.into(),
        })),
        Err(failure) => {
            log::debug!("Login rejected: {failure:?}");
            Err(ApiError::unauthorized("Invalid email or password"))
        }
    }
}

/// POST /api/account/photo
///
/// Multipart upload, field name `file`.
pub async fn upload_photo(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    mut multipart: Multipart,
) -> ApiResult<Json<UserResponse>> {
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
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::validation(format!("Failed to read upload: {e}")))?;

        let stored = state
            .files
            .store(user_id, FilePurpose::ProfilePhoto, &file_name, &bytes)
            .await?;

        let user = services::auth::set_photo_path(&state.pool, user_id, stored.relative_path)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))?;

        return Ok(Json(UserResponse {
            user: UserDto::from(user),
        }));
    }

    Err(ApiError::validation("Missing `file` field"))
}
