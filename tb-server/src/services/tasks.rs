use crate::services::files::{FilePurpose, FileStore};
use crate::services::{access, notifications};
use crate::{ApiError, ApiResult};

use tb_core::{
    Attachment, BoardRole, Checklist, ChecklistItem, Comment, Label, NotificationKind, Task,
    TaskAssignee, TaskLabel, TaskPriority, TaskStatus,
};
use tb_db::{SqliteRepository, lookups};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A task with all related collections, for the detail endpoint.
pub struct TaskDetail {
    pub task: Task,
    pub assignees: Vec<TaskAssignee>,
    pub labels: Vec<Label>,
    pub comments: Vec<Comment>,
    pub checklists: Vec<(Checklist, Vec<ChecklistItem>)>,
    pub attachments: Vec<Attachment>,
}

/// Field-by-field task update; None leaves the field unchanged.
#[derive(Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
}

pub async fn get_detail(pool: &SqlitePool, task_id: Uuid, user_id: Uuid) -> ApiResult<TaskDetail> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Viewer).await?;

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    let task = tasks
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    let assignees = tasks.find_children::<TaskAssignee>(&task_id).await?;
    let labels = lookups::labels_for_task(pool, task_id).await?;
    let comments = tasks.find_children::<Comment>(&task_id).await?;
    let attachments = tasks.find_children::<Attachment>(&task_id).await?;

    let checklist_repo = SqliteRepository::<Checklist>::new(pool.clone());
    let mut checklists = Vec::new();
    for checklist in tasks.find_children::<Checklist>(&task_id).await? {
        let items = checklist_repo
            .find_children::<ChecklistItem>(&checklist.id)
            .await?;
        checklists.push((checklist, items));
    }

    Ok(TaskDetail {
        task,
        assignees,
        labels,
        comments,
        checklists,
        attachments,
    })
}

pub async fn update_task(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
    update: TaskUpdate,
) -> ApiResult<Task> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Member).await?;

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    let mut task = tasks
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    if let Some(title) = update.title {
        if title.trim().is_empty() {
            return Err(ApiError::validation("Task title cannot be empty"));
        }
        task.title = title;
    }
    if let Some(description) = update.description {
        task.description = Some(description);
    }
    if let Some(due_date) = update.due_date {
        task.due_date = Some(due_date);
    }
    if let Some(priority) = update.priority {
        task.priority = priority;
    }
    if let Some(status) = update.status {
        task.status = status;
    }
    task.updated_at = Utc::now();
    tasks.update(&task).await?;

    Ok(task)
}

pub async fn delete_task(pool: &SqlitePool, task_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Member).await?;

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    tasks.delete(&task_id).await?;

    Ok(())
}

/// Move a task to another list on the same board, appending at the end.
/// Cross-board moves are rejected.
pub async fn move_task(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
    target_list_id: Uuid,
) -> ApiResult<Task> {
    let board_id = access::require_task_role(pool, task_id, user_id, BoardRole::Member).await?;

    let target_board_id = access::board_for_list(pool, target_list_id).await?;
    if target_board_id != board_id {
        return Err(ApiError::validation(
            "Cannot move a task to a list on a different board",
        ));
    }

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    let mut task = tasks
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    task.list_id = target_list_id;
    task.position = lookups::next_task_position(pool, target_list_id).await?;
    task.updated_at = Utc::now();
    tasks.update(&task).await?;

    Ok(task)
}

/// Assign a user. The assignee must have access to the board; assigning
/// someone else emits an assignment notification.
pub async fn add_assignee(
    pool: &SqlitePool,
    task_id: Uuid,
    acting_user_id: Uuid,
    assignee_id: Uuid,
) -> ApiResult<TaskAssignee> {
    let board_id =
        access::require_task_role(pool, task_id, acting_user_id, BoardRole::Member).await?;

    if !access::has_access_to_board(pool, board_id, assignee_id).await? {
        return Err(ApiError::validation(
            "Assignee does not have access to this board",
        ));
    }
    if find_assignee(pool, task_id, assignee_id).await?.is_some() {
        return Err(ApiError::validation("User is already assigned to this task"));
    }

    let assignees = SqliteRepository::<TaskAssignee>::new(pool.clone());
    let assignee = TaskAssignee::new(task_id, assignee_id);
    assignees.add(&assignee).await?;

    if assignee_id != acting_user_id {
        let tasks = SqliteRepository::<Task>::new(pool.clone());
        if let Some(task) = tasks.find_by_id(&task_id).await? {
            notifications::notify(
                pool,
                assignee_id,
                NotificationKind::Assignment,
                format!("You were assigned to \"{}\"", task.title),
                Some(task_id),
            )
            .await?;
        }
    }

    Ok(assignee)
}

pub async fn remove_assignee(
    pool: &SqlitePool,
    task_id: Uuid,
    acting_user_id: Uuid,
    assignee_id: Uuid,
) -> ApiResult<()> {
    access::require_task_role(pool, task_id, acting_user_id, BoardRole::Member).await?;

    let assignee = find_assignee(pool, task_id, assignee_id)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "User {} is not assigned to task {}",
                assignee_id, task_id
            ))
        })?;

    let assignees = SqliteRepository::<TaskAssignee>::new(pool.clone());
    assignees.delete(&assignee.id).await?;

    Ok(())
}

/// Attach a board label to the task. The label must belong to the task's
/// board.
pub async fn attach_label(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
    label_id: Uuid,
) -> ApiResult<TaskLabel> {
    let board_id = access::require_task_role(pool, task_id, user_id, BoardRole::Member).await?;

    let labels = SqliteRepository::<Label>::new(pool.clone());
    let label = labels
        .find_by_id(&label_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Label {} not found", label_id)))?;
    if label.board_id != board_id {
        return Err(ApiError::validation("Label belongs to a different board"));
    }
    if find_task_label(pool, task_id, label_id).await?.is_some() {
        return Err(ApiError::validation("Label is already on this task"));
    }

    let task_labels = SqliteRepository::<TaskLabel>::new(pool.clone());
    let task_label = TaskLabel::new(task_id, label_id);
    task_labels.add(&task_label).await?;

    Ok(task_label)
}

pub async fn detach_label(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
    label_id: Uuid,
) -> ApiResult<()> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Member).await?;

    let task_label = find_task_label(pool, task_id, label_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Label is not on this task"))?;

    let task_labels = SqliteRepository::<TaskLabel>::new(pool.clone());
    task_labels.delete(&task_label.id).await?;

    Ok(())
}

pub async fn list_comments(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Vec<Comment>> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Viewer).await?;

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    Ok(tasks.find_children::<Comment>(&task_id).await?)
}

/// Comment on a task. Member access; the task owner is notified unless
/// they wrote the comment themselves.
pub async fn add_comment(
    pool: &SqlitePool,
    task_id: Uuid,
    author_id: Uuid,
    content: String,
) -> ApiResult<Comment> {
    access::require_task_role(pool, task_id, author_id, BoardRole::Member).await?;
    if content.trim().is_empty() {
        return Err(ApiError::validation("Comment cannot be empty"));
    }

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    let task = tasks
        .find_by_id(&task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Task {} not found", task_id)))?;

    let comments = SqliteRepository::<Comment>::new(pool.clone());
    let comment = Comment::new(task_id, author_id, content);
    comments.add(&comment).await?;

    if task.owner_id != author_id {
        notifications::notify(
            pool,
            task.owner_id,
            NotificationKind::Comment,
            format!("New comment on \"{}\"", task.title),
            Some(task_id),
        )
        .await?;
    }

    Ok(comment)
}

/// Delete a comment: its author, or a board admin.
pub async fn delete_comment(pool: &SqlitePool, comment_id: Uuid, user_id: Uuid) -> ApiResult<()> {
    let comments = SqliteRepository::<Comment>::new(pool.clone());
    let comment = comments
        .find_by_id(&comment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Comment {} not found", comment_id)))?;

    if comment.author_id != user_id {
        let board_id = access::board_for_task(pool, comment.task_id).await?;
        access::require_role(pool, board_id, user_id, BoardRole::Admin).await?;
    }

    comments.delete(&comment_id).await?;
    Ok(())
}

pub async fn list_checklists(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Vec<(Checklist, Vec<ChecklistItem>)>> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Viewer).await?;

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    let checklist_repo = SqliteRepository::<Checklist>::new(pool.clone());

    let mut result = Vec::new();
    for checklist in tasks.find_children::<Checklist>(&task_id).await? {
        let items = checklist_repo
            .find_children::<ChecklistItem>(&checklist.id)
            .await?;
        result.push((checklist, items));
    }

    Ok(result)
}

pub async fn create_checklist(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
    title: String,
) -> ApiResult<Checklist> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Member).await?;
    if title.trim().is_empty() {
        return Err(ApiError::validation("Checklist title cannot be empty"));
    }

    let position = lookups::next_checklist_position(pool, task_id).await?;
    let checklists = SqliteRepository::<Checklist>::new(pool.clone());
    let checklist = Checklist::new(task_id, title, position);
    checklists.add(&checklist).await?;

    Ok(checklist)
}

pub async fn delete_checklist(
    pool: &SqlitePool,
    checklist_id: Uuid,
    user_id: Uuid,
) -> ApiResult<()> {
    let checklist = checklist_by_id(pool, checklist_id).await?;
    access::require_task_role(pool, checklist.task_id, user_id, BoardRole::Member).await?;

    let checklists = SqliteRepository::<Checklist>::new(pool.clone());
    checklists.delete(&checklist_id).await?;

    Ok(())
}

pub async fn create_checklist_item(
    pool: &SqlitePool,
    checklist_id: Uuid,
    user_id: Uuid,
    content: String,
) -> ApiResult<ChecklistItem> {
    let checklist = checklist_by_id(pool, checklist_id).await?;
    access::require_task_role(pool, checklist.task_id, user_id, BoardRole::Member).await?;
    if content.trim().is_empty() {
        return Err(ApiError::validation("Checklist item cannot be empty"));
    }

    let position = lookups::next_checklist_item_position(pool, checklist_id).await?;
    let items = SqliteRepository::<ChecklistItem>::new(pool.clone());
    let item = ChecklistItem::new(checklist_id, content, position);
    items.add(&item).await?;

    Ok(item)
}

/// Update a checklist item. Checking records who and when; unchecking
/// clears both.
pub async fn update_checklist_item(
    pool: &SqlitePool,
    item_id: Uuid,
    user_id: Uuid,
    content: Option<String>,
    position: Option<i32>,
    is_checked: Option<bool>,
) -> ApiResult<ChecklistItem> {
    let items = SqliteRepository::<ChecklistItem>::new(pool.clone());
    let mut item = items
        .find_by_id(&item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Checklist item {} not found", item_id)))?;

    let checklist = checklist_by_id(pool, item.checklist_id).await?;
    access::require_task_role(pool, checklist.task_id, user_id, BoardRole::Member).await?;

    if let Some(content) = content {
        if content.trim().is_empty() {
            return Err(ApiError::validation("Checklist item cannot be empty"));
        }
        item.content = content;
    }
    if let Some(position) = position {
        item.position = position;
    }
    match is_checked {
        Some(true) if !item.is_checked => item.check(user_id),
        Some(false) if item.is_checked => item.uncheck(),
        _ => {}
    }

    items.update(&item).await?;
    Ok(item)
}

pub async fn delete_checklist_item(
    pool: &SqlitePool,
    item_id: Uuid,
    user_id: Uuid,
) -> ApiResult<()> {
    let items = SqliteRepository::<ChecklistItem>::new(pool.clone());
    let item = items
        .find_by_id(&item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Checklist item {} not found", item_id)))?;

    let checklist = checklist_by_id(pool, item.checklist_id).await?;
    access::require_task_role(pool, checklist.task_id, user_id, BoardRole::Member).await?;

    items.delete(&item_id).await?;
    Ok(())
}

pub async fn list_attachments(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Vec<Attachment>> {
    access::require_task_role(pool, task_id, user_id, BoardRole::Viewer).await?;

    let tasks = SqliteRepository::<Task>::new(pool.clone());
    Ok(tasks.find_children::<Attachment>(&task_id).await?)
}

/// Store the upload on disk and record its metadata. Member access.
pub async fn add_attachment(
    pool: &SqlitePool,
    files: &FileStore,
    task_id: Uuid,
    uploader_id: Uuid,
    file_name: String,
    content_type: String,
    bytes: &[u8],
) -> ApiResult<Attachment> {
    access::require_task_role(pool, task_id, uploader_id, BoardRole::Member).await?;

    let stored = files
        .store(uploader_id, FilePurpose::TaskAttachment, &file_name, bytes)
        .await?;

    let attachments = SqliteRepository::<Attachment>::new(pool.clone());
    let attachment = Attachment::new(
        task_id,
        uploader_id,
        file_name,
        stored.relative_path,
        stored.size as i64,
        content_type,
    );
    attachments.add(&attachment).await?;

    Ok(attachment)
}

/// Remove the metadata row, then the file. The uploader or a board admin.
pub async fn delete_attachment(
    pool: &SqlitePool,
    files: &FileStore,
    attachment_id: Uuid,
    user_id: Uuid,
) -> ApiResult<()> {
    let attachments = SqliteRepository::<Attachment>::new(pool.clone());
    let attachment = attachments
        .find_by_id(&attachment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Attachment {} not found", attachment_id)))?;

    if attachment.uploader_id != user_id {
        let board_id = access::board_for_task(pool, attachment.task_id).await?;
        access::require_role(pool, board_id, user_id, BoardRole::Admin).await?;
    }

    attachments.delete(&attachment_id).await?;

    if let Err(e) = files.remove(&attachment.file_path).await {
        log::warn!("Orphaned upload {}: {}", attachment.file_path, e);
    }

    Ok(())
}

async fn checklist_by_id(pool: &SqlitePool, checklist_id: Uuid) -> ApiResult<Checklist> {
    let checklists = SqliteRepository::<Checklist>::new(pool.clone());
    checklists
        .find_by_id(&checklist_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Checklist {} not found", checklist_id)))
}

async fn find_assignee(
    pool: &SqlitePool,
    task_id: Uuid,
    user_id: Uuid,
) -> ApiResult<Option<TaskAssignee>> {
    let assignees = SqliteRepository::<TaskAssignee>::new(pool.clone());
    let mut query = assignees.select();
    query
        .push(" WHERE task_id = ")
        .push_bind(task_id.to_string())
        .push(" AND user_id = ")
        .push_bind(user_id.to_string());

    Ok(assignees.fetch_optional(&mut query).await?)
}

async fn find_task_label(
    pool: &SqlitePool,
    task_id: Uuid,
    label_id: Uuid,
) -> ApiResult<Option<TaskLabel>> {
    let task_labels = SqliteRepository::<TaskLabel>::new(pool.clone());
    let mut query = task_labels.select();
    query
        .push(" WHERE task_id = ")
        .push_bind(task_id.to_string())
        .push(" AND label_id = ")
        .push_bind(label_id.to_string());

    Ok(task_labels.fetch_optional(&mut query).await?)
}
