pub mod add_assignee_request;
pub mod assignee_dto;
pub mod assignee_response;
pub mod create_task_request;
pub mod move_task_request;
pub mod task_detail_response;
pub mod task_dto;
pub mod task_list_response;
pub mod task_response;
#[allow(clippy::module_inception)]
pub mod tasks;
pub mod update_task_request;
