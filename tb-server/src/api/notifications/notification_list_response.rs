use crate::NotificationDto;
use serde::Serialize;

/// The caller's notifications, unread first
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationDto>,
}
