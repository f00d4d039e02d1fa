use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddAssigneeRequest {
    /// The user to assign; must have access to the board
    pub user_id: String,
}
