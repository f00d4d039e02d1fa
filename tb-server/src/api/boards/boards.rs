//! Board REST API handlers
//!
//! Boards plus their membership sub-resource.

use crate::{
    AddMemberRequest, ApiResult, AppState, BoardDetailResponse, BoardDto,
    BoardListResponse, BoardResponse, CreateBoardRequest, CurrentUser, DeleteResponse,
    MemberDto, MemberListResponse, MemberResponse, UpdateBoardRequest, UpdateMemberRequest,
    api::boards::board_detail_response::ListWithTasksDto,
    services,
};

use tb_core::BoardRole;

use std::str::FromStr;

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

/// GET /api/boards
///
/// Boards the caller owns or is a member of
pub async fn list_boards(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> ApiResult<Json<BoardListResponse>> {
    let boards = services::boards::boards_for_user(&state.pool, user_id).await?;

    Ok(Json(BoardListResponse {
        boards: boards.into_iter().map(BoardDto::from).collect(),
    }))
}

/// POST /api/boards
pub async fn create_board(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(request): Json<CreateBoardRequest>,
) -> ApiResult<impl IntoResponse> {
    let board =
        services::boards::create_board(&state.pool, user_id, request.title, request.description)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(BoardResponse {
            board: board.into(),
        }),
    ))
}

/// GET /api/boards/{id}
///
/// The board with every list and its tasks, in position order
pub async fn get_board(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BoardDetailResponse>> {
    let board_id = Uuid::parse_str(&id)?;

    let (board, lists) = services::boards::board_detail(&state.pool, board_id, user_id).await?;

    Ok(Json(BoardDetailResponse {
        board: board.into(),
        lists: lists
            .into_iter()
            .map(|(list, tasks)| ListWithTasksDto {
                list: list.into(),
                tasks: tasks.into_iter().map(Into::into).collect(),
            })
            .collect(),
    }))
}

/// PUT /api/boards/{id}
pub async fn update_board(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateBoardRequest>,
) -> ApiResult<Json<BoardResponse>> {
    let board_id = Uuid::parse_str(&id)?;

    let board = services::boards::update_board(
        &state.pool,
        board_id,
        user_id,
        request.title,
        request.description,
    )
    .await?;

    Ok(Json(BoardResponse {
        board: board.into(),
    }))
}

/// DELETE /api/boards/{id}
pub async fn delete_board(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let board_id = Uuid::parse_str(&id)?;

    services::boards::delete_board(&state.pool, board_id, user_id).await?;

    Ok(Json(DeleteResponse::new(board_id)))
}

/// GET /api/boards/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let board_id = Uuid::parse_str(&id)?;

    let members = services::boards::list_members(&state.pool, board_id, user_id).await?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MemberDto::from).collect(),
    }))
}

/// POST /api/boards/{id}/members
pub async fn add_member(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(request): Json<AddMemberRequest>,
) -> ApiResult<impl IntoResponse> {
    let board_id = Uuid::parse_str(&id)?;
    let new_member_id = Uuid::parse_str(&request.user_id)?;
    let role = match request.role.as_deref() {
        Some(raw) => BoardRole::from_str(raw)?,
        None => BoardRole::Member,
    };

    let member =
        services::boards::add_member(&state.pool, board_id, user_id, new_member_id, role).await?;

    Ok((
        StatusCode::CREATED,
        Json(MemberResponse {
            member: member.into(),
        }),
    ))
}

/// PUT /api/boards/{id}/members/{user_id}
pub async fn update_member(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((id, member_user_id)): Path<(String, String)>,
    Json(request): Json<UpdateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let board_id = Uuid::parse_str(&id)?;
    let member_user_id = Uuid::parse_str(&member_user_id)?;
    let role = BoardRole::from_str(&request.role)?;

    let member =
        services::boards::update_member_role(&state.pool, board_id, user_id, member_user_id, role)
            .await?;

    Ok(Json(MemberResponse {
        member: member.into(),
    }))
}

/// DELETE /api/boards/{id}/members/{user_id}
///
/// Admins can remove anyone; members can remove themselves.
pub async fn remove_member(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path((id, member_user_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let board_id = Uuid::parse_str(&id)?;
    let member_user_id = Uuid::parse_str(&member_user_id)?;

    services::boards::remove_member(&state.pool, board_id, user_id, member_user_id).await?;

    Ok(Json(DeleteResponse::new(member_user_id)))
}
