use crate::{BoardDto, ListDto, TaskDto};
use serde::Serialize;

/// A list together with its tasks, in position order
#[derive(Debug, Serialize)]
pub struct ListWithTasksDto {
    pub list: ListDto,
    pub tasks: Vec<TaskDto>,
}

/// Full board view: the board plus every list and its tasks
#[derive(Debug, Serialize)]
pub struct BoardDetailResponse {
    pub board: BoardDto,
    pub lists: Vec<ListWithTasksDto>,
}
