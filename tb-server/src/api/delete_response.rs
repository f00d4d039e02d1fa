use serde::Serialize;

/// Uniform response body for DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}

impl DeleteResponse {
    pub fn new(id: impl ToString) -> Self {
        Self {
            deleted: true,
            id: id.to_string(),
        }
    }
}
