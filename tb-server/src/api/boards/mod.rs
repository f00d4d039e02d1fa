pub mod add_member_request;
pub mod board_detail_response;
pub mod board_dto;
pub mod board_list_response;
pub mod board_response;
#[allow(clippy::module_inception)]
pub mod boards;
pub mod create_board_request;
pub mod member_dto;
pub mod member_list_response;
pub mod member_response;
pub mod update_board_request;
pub mod update_member_request;
