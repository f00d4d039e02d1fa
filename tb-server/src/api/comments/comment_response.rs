use crate::CommentDto;
use serde::Serialize;

/// Single comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentDto,
}
