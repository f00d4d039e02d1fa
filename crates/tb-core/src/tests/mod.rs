mod board_role;
mod notification_kind;
mod task_status;
