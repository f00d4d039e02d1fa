use crate::MessageDto;
use serde::Serialize;

/// A two-party conversation in chronological order
#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageDto>,
}
