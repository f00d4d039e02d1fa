//! Join-based lookups the single-table query builder cannot express.

use crate::Result as DbErrorResult;
use crate::entity::Entity;
use crate::row;

use tb_core::Label;

use sqlx::SqlitePool;
use uuid::Uuid;

/// User id registered under the given email, if any.
pub async fn user_id_for_email(pool: &SqlitePool, email: &str) -> DbErrorResult<Option<Uuid>> {
    let row = sqlx::query("SELECT id FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    row.map(|r| row::uuid_col(&r, "id")).transpose()
}

/// Board owning the given list, if the list exists.
pub async fn board_id_for_list(pool: &SqlitePool, list_id: Uuid) -> DbErrorResult<Option<Uuid>> {
    let row = sqlx::query("SELECT board_id FROM lists WHERE id = ?")
        .bind(list_id.to_string())
        .fetch_optional(pool)
        .await?;

    row.map(|r| row::uuid_col(&r, "board_id")).transpose()
}

/// Board owning the given task, resolved transitively through its list.
pub async fn board_id_for_task(pool: &SqlitePool, task_id: Uuid) -> DbErrorResult<Option<Uuid>> {
    let row = sqlx::query(
        r#"
            SELECT l.board_id AS board_id
            FROM tasks t
            JOIN lists l ON l.id = t.list_id
            WHERE t.id = ?
        "#,
    )
    .bind(task_id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(|r| row::uuid_col(&r, "board_id")).transpose()
}

/// Labels attached to a task, through the task_labels join table.
pub async fn labels_for_task(pool: &SqlitePool, task_id: Uuid) -> DbErrorResult<Vec<Label>> {
    let rows = sqlx::query(
        r#"
            SELECT l.id, l.board_id, l.name, l.color
            FROM labels l
            JOIN task_labels tl ON tl.label_id = l.id
            WHERE tl.task_id = ?
            ORDER BY l.name ASC
        "#,
    )
    .bind(task_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.iter().map(Label::from_row).collect()
}

/// Next free position at the end of a board's lists.
pub async fn next_list_position(pool: &SqlitePool, board_id: Uuid) -> DbErrorResult<i32> {
    next_position(pool, "lists", "board_id", board_id).await
}

/// Next free position at the end of a list's tasks.
pub async fn next_task_position(pool: &SqlitePool, list_id: Uuid) -> DbErrorResult<i32> {
    next_position(pool, "tasks", "list_id", list_id).await
}

/// Next free position at the end of a task's checklists.
pub async fn next_checklist_position(pool: &SqlitePool, task_id: Uuid) -> DbErrorResult<i32> {
    next_position(pool, "checklists", "task_id", task_id).await
}

/// Next free position at the end of a checklist's items.
pub async fn next_checklist_item_position(
    pool: &SqlitePool,
    checklist_id: Uuid,
) -> DbErrorResult<i32> {
    next_position(pool, "checklist_items", "checklist_id", checklist_id).await
}

async fn next_position(
    pool: &SqlitePool,
    table: &str,
    fk: &str,
    parent_id: Uuid,
) -> DbErrorResult<i32> {
    let sql = format!("SELECT COALESCE(MAX(position) + 1, 0) FROM {table} WHERE {fk} = ?");
    let position: i64 = sqlx::query_scalar(&sql)
        .bind(parent_id.to_string())
        .fetch_one(pool)
        .await?;

    Ok(position as i32)
}
