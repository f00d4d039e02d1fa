pub mod attachment;
pub mod board;
pub mod board_member;
pub mod board_role;
pub mod checklist;
pub mod checklist_item;
pub mod comment;
pub mod label;
pub mod list;
pub mod message;
pub mod notification;
pub mod notification_kind;
pub mod task;
pub mod task_assignee;
pub mod task_label;
pub mod task_priority;
pub mod task_status;
pub mod user;
