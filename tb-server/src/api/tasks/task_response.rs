use crate::TaskDto;
use serde::Serialize;

/// Single task response
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskDto,
}
