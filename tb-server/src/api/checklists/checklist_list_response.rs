use crate::ChecklistWithItemsDto;
use serde::Serialize;

/// All checklists on a task, each with its items
#[derive(Debug, Serialize)]
pub struct ChecklistListResponse {
    pub checklists: Vec<ChecklistWithItemsDto>,
}
