use tb_core::ChecklistItem;

use serde::Serialize;

/// Checklist item DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ChecklistItemDto {
    pub id: String,
    pub checklist_id: String,
    pub content: String,
    pub position: i32,
    pub is_checked: bool,
    pub completed_by: Option<String>,
    pub completed_at: Option<i64>,
}

impl From<ChecklistItem> for ChecklistItemDto {
    fn from(i: ChecklistItem) -> Self {
        Self {
            id: i.id.to_string(),
            checklist_id: i.checklist_id.to_string(),
            content: i.content,
            position: i.position,
            is_checked: i.is_checked,
            completed_by: i.completed_by.map(|u| u.to_string()),
            completed_at: i.completed_at.map(|t| t.timestamp()),
        }
    }
}
