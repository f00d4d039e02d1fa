pub mod create_list_request;
pub mod list_collection_response;
pub mod list_dto;
pub mod list_response;
#[allow(clippy::module_inception)]
pub mod lists;
pub mod update_list_request;
