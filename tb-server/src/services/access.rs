//! Authorization checks.
//!
//! Every board- or task-scoped operation calls one of these first. The
//! checks never mutate state. The board owner holds an implicit admin role
//! without a membership row.

use crate::{ApiError, ApiResult};

use tb_core::{Board, BoardMember, BoardRole};
use tb_db::{SqliteRepository, lookups};

use sqlx::SqlitePool;
use uuid::Uuid;

/// The user's effective role on the board, or None for no access.
/// Errors with 404 when the board does not exist.
pub async fn role_on_board(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Option<BoardRole>> {
    let boards = SqliteRepository::<Board>::new(pool.clone());
    let board = boards
        .find_by_id(&board_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    if board.owner_id == user_id {
        return Ok(Some(BoardRole::Admin));
    }

    let members = SqliteRepository::<BoardMember>::new(pool.clone());
    let mut query = members.select();
    query
        .push(" WHERE board_id = ")
        .push_bind(board_id.to_string())
        .push(" AND user_id = ")
        .push_bind(user_id.to_string());

    let membership = members.fetch_optional(&mut query).await?;
    Ok(membership.map(|m| m.role))
}

pub async fn has_access_to_board(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<bool> {
    Ok(role_on_board(pool, board_id, user_id).await?.is_some())
}

pub async fn has_access_to_task(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
) -> ApiResult<bool> {
    let board_id = board_for_task(pool, task_id).await?;
    has_access_to_board(pool, board_id, user_id).await
}

/// Require at least `min` on the board, returning the effective role.
pub async fn require_role(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
    min: BoardRole,
) -> ApiResult<BoardRole> {
    let role = role_on_board(pool, board_id, user_id)
        .await?
        .ok_or_else(|| ApiError::forbidden("You do not have access to this board"))?;

    if role < min {
        return Err(ApiError::forbidden(format!(
            "This operation requires the {} role",
            min
        )));
    }

    Ok(role)
}

/// Board owning the task; 404 when the task does not exist.
pub async fn board_for_task(pool: &SqlitePool, task_id: Uuid) -> ApiResult<Uuid> {
    lookups::board_id_for_task(pool, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))
}

/// Board owning the list; 404 when the list does not exist.
pub async fn board_for_list(pool: &SqlitePool, list_id: Uuid) -> ApiResult<Uuid> {
    lookups::board_id_for_list(pool, list_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("List {} not found", list_id)))
}

/// Require at least `min` on the board the task belongs to; returns the
/// board id for callers that need it afterwards.
pub async fn require_task_role(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
    min: BoardRole,
) -> ApiResult<Uuid> {
    let board_id = board_for_task(pool, task_id).await?;
    require_role(pool, board_id, user_id, min).await?;
    Ok(board_id)
}

/// Require at least `min` on the board the list belongs to.
pub async fn require_list_role(
    pool: &SqlitePool,
    list_id: Uuid,
    user_id: Uuid,
    min: BoardRole,
) -> ApiResult<Uuid> {
    let board_id = board_for_list(pool, list_id).await?;
    require_role(pool, board_id, user_id, min).await?;
    Ok(board_id)
}
