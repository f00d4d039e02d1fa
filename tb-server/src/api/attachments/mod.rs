pub mod attachment_dto;
pub mod attachment_list_response;
pub mod attachment_response;
#[allow(clippy::module_inception)]
pub mod attachments;
