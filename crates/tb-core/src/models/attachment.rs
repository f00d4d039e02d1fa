use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File attached to a task. The bytes live on disk under the storage base
/// directory; this record only carries metadata and the relative path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub uploader_id: Uuid,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Attachment {
    pub fn new(
        task_id: Uuid,
        uploader_id: Uuid,
        file_name: String,
        file_path: String,
        file_size: i64,
        content_type: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            uploader_id,
            file_name,
            file_path,
            file_size,
            content_type,
            uploaded_at: Utc::now(),
        }
    }
}
