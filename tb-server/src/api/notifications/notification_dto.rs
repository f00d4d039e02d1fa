use tb_core::Notification;

use serde::Serialize;

/// Notification DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: String,
    pub recipient_id: String,
    pub kind: String,
    pub content: String,
    pub is_read: bool,
    pub related_id: Option<String>,
    pub created_at: i64,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id.to_string(),
            recipient_id: n.recipient_id.to_string(),
            kind: n.kind.as_str().to_string(),
            content: n.content,
            is_read: n.is_read,
            related_id: n.related_id.map(|r| r.to_string()),
            created_at: n.created_at.timestamp(),
        }
    }
}
