use tb_core::Task;

use serde::Serialize;

/// Task DTO for JSON serialization. Priority and status are their wire
/// strings, timestamps are unix seconds.
#[derive(Debug, Serialize)]
pub struct TaskDto {
    pub id: String,
    pub list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<i64>,
    pub priority: String,
    pub status: String,
    pub position: i32,
    pub owner_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Task> for TaskDto {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            list_id: t.list_id.to_string(),
            title: t.title,
            description: t.description,
            due_date: t.due_date.map(|d| d.timestamp()),
            priority: t.priority.as_str().to_string(),
            status: t.status.as_str().to_string(),
            position: t.position,
            owner_id: t.owner_id.to_string(),
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
