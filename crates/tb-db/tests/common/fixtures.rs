#![allow(dead_code)]

use tb_core::{Board, Label, List, Task, User};

use uuid::Uuid;

/// Creates a test User with unique username/email
pub fn create_test_user() -> User {
    let tag = Uuid::new_v4().simple().to_string();
    User::new(
        format!("user-{tag}"),
        format!("{tag}@example.com"),
        "$argon2id$test-hash".to_string(),
        "Test".to_string(),
        "User".to_string(),
    )
}

/// Creates a test Board owned by the given user
pub fn create_test_board(owner_id: Uuid) -> Board {
    Board::new(
        "Test Board".to_string(),
        Some("Test board description".to_string()),
        owner_id,
    )
}

/// Creates a test List on a board
pub fn create_test_list(board_id: Uuid, position: i32) -> List {
    List::new(board_id, format!("List {position}"), position)
}

/// Creates a test Task in a list
pub fn create_test_task(list_id: Uuid, owner_id: Uuid, position: i32) -> Task {
    Task::new(
        list_id,
        format!("Task {position}"),
        Some("Test task description".to_string()),
        owner_id,
        position,
    )
}

/// Creates a test Label on a board
pub fn create_test_label(board_id: Uuid) -> Label {
    Label::new(board_id, "urgent".to_string(), "#ff6b6b".to_string())
}
