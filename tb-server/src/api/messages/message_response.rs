use crate::MessageDto;
use serde::Serialize;

/// Single message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: MessageDto,
}
