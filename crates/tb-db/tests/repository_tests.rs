mod common;

use common::{create_test_board, create_test_pool, create_test_user, count_rows};

use tb_core::{Board, User};
use tb_db::SqliteRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_board_when_added_then_exists_and_can_be_found() {
    // Given: A test database with a user
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());
    let boards = SqliteRepository::<Board>::new(pool.clone());

    let user = create_test_user();
    users.add(&user).await.unwrap();

    let board = create_test_board(user.id);

    // When: Adding the board
    boards.add(&board).await.unwrap();

    // Then: It exists and round-trips through find_by_id
    assert_that!(boards.exists(&board.id).await.unwrap(), eq(true));

    let found = boards.find_by_id(&board.id).await.unwrap().unwrap();
    assert_that!(found.id, eq(board.id));
    assert_that!(found.title, eq(&board.title));
    assert_that!(found.owner_id, eq(user.id));
    assert_that!(found.description, eq(&board.description));
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let boards = SqliteRepository::<Board>::new(pool);

    let nonexistent_id = Uuid::new_v4();

    // Then: No error, just absence
    assert_that!(boards.exists(&nonexistent_id).await.unwrap(), eq(false));
    assert_that!(
        boards.find_by_id(&nonexistent_id).await.unwrap(),
        none()
    );
}

#[tokio::test]
async fn given_existing_board_when_updated_then_changes_are_persisted() {
    // Given: A board exists
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());
    let boards = SqliteRepository::<Board>::new(pool.clone());

    let user = create_test_user();
    users.add(&user).await.unwrap();
    let mut board = create_test_board(user.id);
    boards.add(&board).await.unwrap();

    // When: Updating title and description
    board.title = "Renamed Board".to_string();
    board.description = None;
    let updated = boards.update(&board).await.unwrap();

    // Then: The replace is persisted in full
    assert_that!(updated, eq(true));
    let found = boards.find_by_id(&board.id).await.unwrap().unwrap();
    assert_that!(found.title, eq("Renamed Board"));
    assert_that!(found.description, none());
}

#[tokio::test]
async fn given_missing_board_when_updated_then_returns_false() {
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());
    let boards = SqliteRepository::<Board>::new(pool.clone());

    let user = create_test_user();
    users.add(&user).await.unwrap();

    // Never added
    let board = create_test_board(user.id);

    assert_that!(boards.update(&board).await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_existing_board_when_deleted_then_absent_and_second_delete_false() {
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());
    let boards = SqliteRepository::<Board>::new(pool.clone());

    let user = create_test_user();
    users.add(&user).await.unwrap();
    let board = create_test_board(user.id);
    boards.add(&board).await.unwrap();

    assert_that!(boards.delete(&board.id).await.unwrap(), eq(true));
    assert_that!(boards.find_by_id(&board.id).await.unwrap(), none());
    assert_that!(boards.delete(&board.id).await.unwrap(), eq(false));
}

#[tokio::test]
async fn given_batch_with_duplicate_id_when_add_range_then_nothing_is_persisted() {
    // Given: A batch where the last row violates the primary key
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());
    let boards = SqliteRepository::<Board>::new(pool.clone());

    let user = create_test_user();
    users.add(&user).await.unwrap();

    let first = create_test_board(user.id);
    let second = create_test_board(user.id);
    let mut duplicate = create_test_board(user.id);
    duplicate.id = first.id;

    // When: Bulk inserting
    let result = boards.add_range(&[first, second, duplicate]).await;

    // Then: The transaction rolled back; no partial persistence
    assert_that!(result.is_err(), eq(true));
    assert_that!(count_rows(&pool, "boards").await, eq(0));
}

#[tokio::test]
async fn given_valid_batch_when_add_range_then_all_rows_are_persisted() {
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());
    let boards = SqliteRepository::<Board>::new(pool.clone());

    let user = create_test_user();
    users.add(&user).await.unwrap();

    let batch = vec![
        create_test_board(user.id),
        create_test_board(user.id),
        create_test_board(user.id),
    ];
    boards.add_range(&batch).await.unwrap();

    assert_that!(count_rows(&pool, "boards").await, eq(3));
}

#[tokio::test]
async fn given_users_when_filtering_via_select_then_only_match_returned() {
    // Given: Two users
    let pool = create_test_pool().await;
    let users = SqliteRepository::<User>::new(pool.clone());

    let alice = create_test_user();
    let bob = create_test_user();
    users.add(&alice).await.unwrap();
    users.add(&bob).await.unwrap();

    // When: Filtering with the composable query surface
    let mut query = users.select();
    query.push(" WHERE email = ").push_bind(alice.email.clone());
    let found = users.fetch_optional(&mut query).await.unwrap();

    // Then: Exactly the matching user decodes
    let found = found.unwrap();
    assert_that!(found.id, eq(alice.id));
    assert_that!(found.username, eq(&alice.username));
}
