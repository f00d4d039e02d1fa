pub mod checklist_dto;
pub mod checklist_item_dto;
pub mod checklist_item_response;
pub mod checklist_list_response;
pub mod checklist_response;
pub mod checklist_with_items_dto;
#[allow(clippy::module_inception)]
pub mod checklists;
pub mod create_checklist_item_request;
pub mod create_checklist_request;
pub mod update_checklist_item_request;
