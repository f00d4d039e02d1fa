use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub checklist_id: Uuid,
    pub content: String,
    pub position: i32,
    pub is_checked: bool,
    /// Who checked the item, kept only while `is_checked` is true.
    pub completed_by: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    pub fn new(checklist_id: Uuid, content: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            checklist_id,
            content,
            position,
            is_checked: false,
            completed_by: None,
            completed_at: None,
        }
    }

    /// Mark the item checked, recording who and when.
    pub fn check(&mut self, user_id: Uuid) {
        self.is_checked = true;
        self.completed_by = Some(user_id);
        self.completed_at = Some(Utc::now());
    }

    /// Clear the checked state and its completion metadata.
    pub fn uncheck(&mut self) {
        self.is_checked = false;
        self.completed_by = None;
        self.completed_at = None;
    }
}
