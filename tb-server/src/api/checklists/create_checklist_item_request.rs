use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateChecklistItemRequest {
    /// Item text (required, non-empty)
    pub content: String,
}
