use crate::{AssigneeDto, AttachmentDto, ChecklistWithItemsDto, CommentDto, LabelDto, TaskDto};

use crate::services::tasks::TaskDetail;

use serde::Serialize;

/// Full task view with every related collection
#[derive(Debug, Serialize)]
pub struct TaskDetailResponse {
    pub task: TaskDto,
    pub assignees: Vec<AssigneeDto>,
    pub labels: Vec<LabelDto>,
    pub comments: Vec<CommentDto>,
    pub checklists: Vec<ChecklistWithItemsDto>,
    pub attachments: Vec<AttachmentDto>,
}

impl From<TaskDetail> for TaskDetailResponse {
    fn from(d: TaskDetail) -> Self {
        Self {
            task: d.task.into(),
            assignees: d.assignees.into_iter().map(Into::into).collect(),
            labels: d.labels.into_iter().map(Into::into).collect(),
            comments: d.comments.into_iter().map(Into::into).collect(),
            checklists: d.checklists.into_iter().map(Into::into).collect(),
            attachments: d.attachments.into_iter().map(Into::into).collect(),
        }
    }
}
