use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    /// Target list; must be on the same board
    pub list_id: String,
}
