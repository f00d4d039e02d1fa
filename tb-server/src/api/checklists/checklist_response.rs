use crate::ChecklistDto;
use serde::Serialize;

/// Single checklist response
#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub checklist: ChecklistDto,
}
