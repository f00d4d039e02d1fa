use crate::ChecklistItemDto;
use serde::Serialize;

/// Single checklist item response
#[derive(Debug, Serialize)]
pub struct ChecklistItemResponse {
    pub item: ChecklistItemDto,
}
