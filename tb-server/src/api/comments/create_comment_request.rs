use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    /// Comment body (required, non-empty)
    pub content: String,
}
