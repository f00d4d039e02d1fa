pub mod account;
pub mod attachments;
pub mod boards;
pub mod checklists;
pub mod comments;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod labels;
pub mod lists;
pub mod messages;
pub mod notifications;
pub mod tasks;
