pub mod mark_all_read_response;
pub mod notification_dto;
pub mod notification_list_response;
pub mod notification_response;
#[allow(clippy::module_inception)]
pub mod notifications;
