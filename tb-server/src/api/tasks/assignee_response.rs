use crate::AssigneeDto;
use serde::Serialize;

/// Single task assignee response
#[derive(Debug, Serialize)]
pub struct AssigneeResponse {
    pub assignee: AssigneeDto,
}
