//! [`crate::Entity`] bindings for every domain model.

mod attachment;
mod board;
mod board_member;
mod checklist;
mod checklist_item;
mod comment;
mod label;
mod list;
mod message;
mod notification;
mod task;
mod task_assignee;
mod task_label;
mod user;
