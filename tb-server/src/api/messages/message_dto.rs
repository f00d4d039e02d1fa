use tb_core::Message;

use serde::Serialize;

/// Direct message DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct MessageDto {
    pub id: String,
    pub sender_id: String,
    pub recipient_id: String,
    pub content: String,
    pub read_at: Option<i64>,
    pub created_at: i64,
}

impl From<Message> for MessageDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.to_string(),
            sender_id: m.sender_id.to_string(),
            recipient_id: m.recipient_id.to_string(),
            content: m.content,
            read_at: m.read_at.map(|t| t.timestamp()),
            created_at: m.created_at.timestamp(),
        }
    }
}
