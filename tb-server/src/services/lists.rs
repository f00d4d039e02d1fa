use crate::services::access;
use crate::{ApiError, ApiResult};

use tb_core::{Board, BoardRole, List, Task, TaskPriority, TaskStatus};
use tb_db::{SqliteRepository, lookups};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub async fn lists_for_board(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Vec<List>> {
    access::require_role(pool, board_id, user_id, BoardRole::Viewer).await?;

    let boards = SqliteRepository::<Board>::new(pool.clone());
    Ok(boards.find_children::<List>(&board_id).await?)
}

/// Create a list. Member access; appended at the end unless a position is
/// given.
pub async fn create_list(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
    title: String,
    position: Option<i32>,
) -> ApiResult<List> {
    access::require_role(pool, board_id, user_id, BoardRole::Member).await?;
    if title.trim().is_empty() {
        return Err(ApiError::validation("List title cannot be empty"));
    }

    let position = match position {
        Some(p) => p,
        None => lookups::next_list_position(pool, board_id).await?,
    };

    let lists = SqliteRepository::<List>::new(pool.clone());
    let list = List::new(board_id, title, position);
    lists.add(&list).await?;

    Ok(list)
}

pub async fn update_list(
    pool: &SqlitePool,
    list_id: Uuid,
    user_id: Uuid,
    title: String,
    position: Option<i32>,
) -> ApiResult<List> {
    access::require_list_role(pool, list_id, user_id, BoardRole::Member).await?;
    if title.trim().is_empty() {
        return Err(ApiError::validation("List title cannot be empty"));
    }

    let lists = SqliteRepository::<List>::new(pool.clone());
    let mut list = lists
        .find_by_id(&list_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("List {} not found", list_id)))?;

    list.title = title;
    if let Some(p) = position {
        list.position = p;
    }
    list.updated_at = Utc::now();
    lists.update(&list).await?;

    Ok(list)
}

pub async fn delete_list(pool: &SqlitePool, list_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    access::require_list_role(pool, list_id, user_id, BoardRole::Member).await?;

    let lists = SqliteRepository::<List>::new(pool.clone());
    lists.delete(&list_id).await?;

    Ok(())
}

pub async fn tasks_for_list(
    pool: &SqlitePool,
    list_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Vec<Task>> {
    access::require_list_role(pool, list_id, user_id, BoardRole::Viewer).await?;

    let lists = SqliteRepository::<List>::new(pool.clone());
    Ok(lists.find_children::<Task>(&list_id).await?)
}

/// Create a task in a list. Member access; the creator becomes the task
/// owner.
#[allow(clippy::too_many_arguments)]
pub async fn create_task(
    pool: &SqlitePool,
    list_id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: Option<TaskPriority>,
    status: Option<TaskStatus>,
) -> ApiResult<Task> {
    access::require_list_role(pool, list_id, user_id, BoardRole::Member).await?;
    if title.trim().is_empty() {
        return Err(ApiError::validation("Task title cannot be empty"));
    }

    let position = lookups::next_task_position(pool, list_id).await?;

    let mut task = Task::new(list_id, title, description, user_id, position);
    task.due_date = due_date;
    if let Some(priority) = priority {
        task.priority = priority;
    }
    if let Some(status) = status {
        task.status = status;
    }

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    tasks.add(&task).await?;

    Ok(task)
}
