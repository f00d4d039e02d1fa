use crate::AttachmentDto;
use serde::Serialize;

/// List of attachments response
#[derive(Debug, Serialize)]
pub struct AttachmentListResponse {
    pub attachments: Vec<AttachmentDto>,
}
