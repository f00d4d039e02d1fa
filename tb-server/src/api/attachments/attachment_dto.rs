use tb_core::Attachment;

use serde::Serialize;

/// Attachment DTO for JSON serialization. The storage path stays
/// server-side; clients address attachments by id.
#[derive(Debug, Serialize)]
pub struct AttachmentDto {
    pub id: String,
    pub task_id: String,
    pub uploader_id: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_type: String,
    pub uploaded_at: i64,
}

impl From<Attachment> for AttachmentDto {
    fn from(a: Attachment) -> Self {
        Self {
            id: a.id.to_string(),
            task_id: a.task_id.to_string(),
            uploader_id: a.uploader_id.to_string(),
            file_name: a.file_name,
            file_size: a.file_size,
            content_type: a.content_type,
            uploaded_at: a.uploaded_at.timestamp(),
        }
    }
}
