use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// The recipient user id (required)
    pub recipient_id: String,

    /// Message body (required, non-empty)
    pub content: String,
}
