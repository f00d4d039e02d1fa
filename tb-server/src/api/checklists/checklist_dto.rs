use tb_core::Checklist;

use serde::Serialize;

/// Checklist DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ChecklistDto {
    pub id: String,
    pub task_id: String,
    pub title: String,
    pub position: i32,
}

impl From<Checklist> for ChecklistDto {
    fn from(c: Checklist) -> Self {
        Self {
            id: c.id.to_string(),
            task_id: c.task_id.to_string(),
            title: c.title,
            position: c.position,
        }
    }
}
