use crate::AttachmentDto;
use serde::Serialize;

/// Single attachment response
#[derive(Debug, Serialize)]
pub struct AttachmentResponse {
    pub attachment: AttachmentDto,
}
