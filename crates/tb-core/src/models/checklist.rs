use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered checklist owned by a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub id: Uuid,
    pub task_id: Uuid,
    pub title: String,
    pub position: i32,
}

impl Checklist {
    pub fn new(task_id: Uuid, title: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            title,
            position,
        }
    }
}
