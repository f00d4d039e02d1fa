use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Join record binding a label to a task. (task, label) pairs are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskLabel {
    pub id: Uuid,
    pub task_id: Uuid,
    pub label_id: Uuid,
}

impl TaskLabel {
    pub fn new(task_id: Uuid, label_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            label_id,
        }
    }
}
