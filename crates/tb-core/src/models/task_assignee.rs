use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Join record binding a user to a task. (task, user) pairs are unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAssignee {
    pub id: Uuid,
    pub task_id: Uuid,
    pub user_id: Uuid,
}

impl TaskAssignee {
    pub fn new(task_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            user_id,
        }
    }
}
