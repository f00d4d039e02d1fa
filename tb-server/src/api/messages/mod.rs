pub mod message_dto;
pub mod message_list_response;
pub mod message_response;
#[allow(clippy::module_inception)]
pub mod messages;
pub mod send_message_request;
