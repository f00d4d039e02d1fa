pub mod create_label_request;
pub mod label_dto;
pub mod label_list_response;
pub mod label_response;
#[allow(clippy::module_inception)]
pub mod labels;
