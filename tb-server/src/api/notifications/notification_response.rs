use crate::NotificationDto;
use serde::Serialize;

/// Single notification response
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification: NotificationDto,
}
