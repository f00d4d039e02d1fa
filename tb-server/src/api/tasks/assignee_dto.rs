use tb_core::TaskAssignee;

use serde::Serialize;

/// Task assignee DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct AssigneeDto {
    pub id: String,
    pub task_id: String,
    pub user_id: String,
}

impl From<TaskAssignee> for AssigneeDto {
    fn from(a: TaskAssignee) -> Self {
        Self {
            id: a.id.to_string(),
            task_id: a.task_id.to_string(),
            user_id: a.user_id.to_string(),
        }
    }
}
