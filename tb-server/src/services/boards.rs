use crate::services::{access, notifications};
use crate::{ApiError, ApiResult};

use tb_core::{Board, BoardMember, BoardRole, Label, List, NotificationKind, Task, User};
use tb_db::SqliteRepository;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a board; the creator becomes its owner (implicit admin).
pub async fn create_board(
    pool: &SqlitePool,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
) -> ApiResult<Board> {
    if title.trim().is_empty() {
        return Err(ApiError::validation("Board title cannot be empty"));
    }

    let boards = SqliteRepository::<Board>::new(pool.clone());
    let board = Board::new(title, description, owner_id);
    boards.add(&board).await?;

    log::info!("Board {} created by {}", board.id, owner_id);
    Ok(board)
}

/// Boards the user owns plus boards they are a member of.
pub async fn boards_for_user(pool: &SqlitePool, user_id: Uuid) -> ApiResult<Vec<Board>> {
    let boards = SqliteRepository::<Board>::new(pool.clone());
    let mut query = boards.select();
    query
        .push(" WHERE owner_id = ")
        .push_bind(user_id.to_string())
        .push(" OR id IN (SELECT board_id FROM board_members WHERE user_id = ")
        .push_bind(user_id.to_string())
        .push(") ORDER BY created_at ASC");

    Ok(boards.fetch_all(&mut query).await?)
}

/// Board with lists and their tasks, eagerly loaded. Viewer access.
pub async fn board_detail(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<(Board, Vec<(List, Vec<Task>)>)> {
    access::require_role(pool, board_id, user_id, BoardRole::Viewer).await?;

    let boards = SqliteRepository::<Board>::new(pool.clone());
    let lists = SqliteRepository::<List>::new(pool.clone());

    let (board, board_lists) = boards
        .find_by_id_with::<List>(&board_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    let mut detail = Vec::with_capacity(board_lists.len());
    for list in board_lists {
        let tasks = lists.find_children::<Task>(&list.id).await?;
        detail.push((list, tasks));
    }

    Ok((board, detail))
}

/// Update title/description. Admin access.
pub async fn update_board(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
) -> ApiResult<Board> {
    access::require_role(pool, board_id, user_id, BoardRole::Admin).await?;
    if title.trim().is_empty() {
        return Err(ApiError::validation("Board title cannot be empty"));
    }

    let boards = SqliteRepository::<Board>::new(pool.clone());
    let mut board = boards
        .find_by_id(&board_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    board.title = title;
    board.description = description;
    board.updated_at = Utc::now();
    boards.update(&board).await?;

    Ok(board)
}

/// Delete a board and everything under it. Owner only.
pub async fn delete_board(pool: &SqlitePool, board_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    let boards = SqliteRepository::<Board>::new(pool.clone());
    let board = boards
        .find_by_id(&board_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;

    if board.owner_id != user_id {
        return Err(ApiError::forbidden("Only the board owner can delete it"));
    }

    boards.delete(&board_id).await?;
    log::info!("Board {} deleted by {}", board_id, user_id);

    Ok(())
}

pub async fn list_members(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Vec<BoardMember>> {
    access::require_role(pool, board_id, user_id, BoardRole::Viewer).await?;

    let boards = SqliteRepository::<Board>::new(pool.clone());
    Ok(boards.find_children::<BoardMember>(&board_id).await?)
}

/// Add a member with a role. Admin access; emits an invitation
/// notification to the new member.
pub async fn add_member(
    pool: &SqlitePool,
    board_id: Uuid,
    inviter_id: Uuid,
    new_member_id: Uuid,
    role: BoardRole,
) -> ApiResult<BoardMember> {
    access::require_role(pool, board_id, inviter_id, BoardRole::Admin).await?;

    let users = SqliteRepository::<User>::new(pool.clone());
    if !users.exists(&new_member_id).await? {
        return Err(ApiError::not_found(format!(
            "User {} not found",
            new_member_id
        )));
    }

    let boards = SqliteRepository::<Board>::new(pool.clone());
    let board = boards
        .find_by_id(&board_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Board {} not found", board_id)))?;
    if board.owner_id == new_member_id {
        return Err(ApiError::validation("The owner is already on the board"));
    }
    if membership(pool, board_id, new_member_id).await?.is_some() {
        return Err(ApiError::validation("User is already a board member"));
    }

    let members = SqliteRepository::<BoardMember>::new(pool.clone());
    let member = BoardMember::new(board_id, new_member_id, role, Some(inviter_id));
    members.add(&member).await?;

    notifications::notify(
        pool,
        new_member_id,
        NotificationKind::Invitation,
        format!("You were added to the board \"{}\"", board.title),
        Some(board_id),
    )
    .await?;

    Ok(member)
}

/// Change a member's role. Admin access.
pub async fn update_member_role(
    pool: &SqlitePool,
    board_id: Uuid,
    acting_user_id: Uuid,
    member_user_id: Uuid,
    role: BoardRole,
) -> ApiResult<BoardMember> {
    access::require_role(pool, board_id, acting_user_id, BoardRole::Admin).await?;

    let mut member = membership(pool, board_id, member_user_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "User {} is not a member of board {}",
                member_user_id, board_id
            ))
        })?;

    member.role = role;
    let members = SqliteRepository::<BoardMember>::new(pool.clone());
    members.update(&member).await?;

    Ok(member)
}

/// Remove a member. Admin access, or a member removing themselves.
pub async fn remove_member(
    pool: &SqlitePool,
    board_id: Uuid,
    acting_user_id: Uuid,
    member_user_id: Uuid,
) -> ApiResult<()> {
    if acting_user_id != member_user_id {
        access::require_role(pool, board_id, acting_user_id, BoardRole::Admin).await?;
    }

    let member = membership(pool, board_id, member_user_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "User {} is not a member of board {}",
                member_user_id, board_id
            ))
        })?;

    let members = SqliteRepository::<BoardMember>::new(pool.clone());
    members.delete(&member.id).await?;

    Ok(())
}

pub async fn list_labels(pool: &SqlitePool, board_id: Uuid, user_id: Uuid) -> ApiResult<Vec<Label>> {
    access::require_role(pool, board_id, user_id, BoardRole::Viewer).await?;

    let boards = SqliteRepository::<Board>::new(pool.clone());
    Ok(boards.find_children::<Label>(&board_id).await?)
}

pub async fn create_label(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
    name: String,
    color: String,
) -> ApiResult<Label> {
    access::require_role(pool, board_id, user_id, BoardRole::Member).await?;
    if name.trim().is_empty() {
        return Err(ApiError::validation("Label name cannot be empty"));
    }

    let labels = SqliteRepository::<Label>::new(pool.clone());
    let label = Label::new(board_id, name, color);
    labels.add(&label).await?;

    Ok(label)
}

/// Delete a label; its task attachments go with it via cascade.
pub async fn delete_label(pool: &SqlitePool, label_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    let labels = SqliteRepository::<Label>::new(pool.clone());
    let label = labels
        .find_by_id(&label_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Label {} not found", label_id)))?;

    access::require_role(pool, label.board_id, user_id, BoardRole::Member).await?;
    labels.delete(&label_id).await?;

    Ok(())
}

/// Membership row for (board, user), if one exists.
async fn membership(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Option<BoardMember>> {
    let members = SqliteRepository::<BoardMember>::new(pool.clone());
    let mut query = members.select();
    query
        .push(" WHERE board_id = ")
        .push_bind(board_id.to_string())
        .push(" AND user_id = ")
        .push_bind(user_id.to_string());

    Ok(members.fetch_optional(&mut query).await?)
}
