pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::attachment::Attachment;
pub use models::board::Board;
pub use models::board_member::BoardMember;
pub use models::board_role::BoardRole;
pub use models::checklist::Checklist;
pub use models::checklist_item::ChecklistItem;
pub use models::comment::Comment;
pub use models::label::Label;
pub use models::list::List;
pub use models::message::Message;
pub use models::notification::Notification;
pub use models::notification_kind::NotificationKind;
pub use models::task::Task;
pub use models::task_assignee::TaskAssignee;
pub use models::task_label::TaskLabel;
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use models::user::User;

#[cfg(test)]
mod tests;
