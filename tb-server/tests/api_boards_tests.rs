//! Integration tests for board handlers and membership
mod common;

use crate::common::{
    bare_request, create_test_state, create_test_user, json_request, response_json, test_router,
};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_and_list_boards() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Sprint 1", "description": "First sprint" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    assert_eq!(body["board"]["title"], "Sprint 1");

    let response = app
        .oneshot(bare_request("GET", "/api/boards", Some(&alice)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let boards = body["boards"].as_array().unwrap();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0]["title"], "Sprint 1");
}

#[tokio::test]
async fn test_outsider_cannot_see_board() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let (_mallory_id, mallory) = create_test_user(&state, "mallory", "mallory@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Private" }),
        ))
        .await
        .unwrap();
    let board_id = response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Not listed for the outsider
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/boards", Some(&mallory)))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["boards"].as_array().unwrap().len(), 0);

    // Detail is forbidden
    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/boards/{}", board_id),
            Some(&mallory),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_added_member_can_view_but_not_admin() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let (bob_id, bob) = create_test_user(&state, "bob", "bob@example.com").await;
    let (carol_id, _carol) = create_test_user(&state, "carol", "carol@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Shared" }),
        ))
        .await
        .unwrap();
    let board_id = response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Owner adds bob as a member
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/members", board_id),
            Some(&alice),
            json!({ "user_id": bob_id.to_string(), "role": "member" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Bob can now see the board
    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/boards/{}", board_id),
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Bob got an invitation notification
    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/notifications", Some(&bob)))
        .await
        .unwrap();
    let body = response_json(response).await;
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["kind"], "invitation");

    // But a plain member cannot add more members
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/members", board_id),
            Some(&bob),
            json!({ "user_id": carol_id.to_string() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_only_owner_can_delete_board() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let (bob_id, bob) = create_test_user(&state, "bob", "bob@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Owned" }),
        ))
        .await
        .unwrap();
    let board_id = response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Even an admin member cannot delete someone else's board
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/members", board_id),
            Some(&alice),
            json!({ "user_id": bob_id.to_string(), "role": "admin" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/boards/{}", board_id),
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/boards/{}", board_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["deleted"], true);
}

#[tokio::test]
async fn test_deleting_board_cascades_to_lists_and_tasks() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Short-lived" }),
        ))
        .await
        .unwrap();
    let board_id = response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/lists", board_id),
            Some(&alice),
            json!({ "title": "Todo" }),
        ))
        .await
        .unwrap();
    let list_id = response_json(response).await["list"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/lists/{}/tasks", list_id),
            Some(&alice),
            json!({ "title": "Doomed task" }),
        ))
        .await
        .unwrap();
    let task_id = response_json(response).await["task"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/boards/{}", board_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Children are gone from the API and from the database itself
    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/tasks/{}", task_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let lists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lists")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    let tasks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(&state.pool)
        .await
        .unwrap();
    assert_eq!(lists, 0);
    assert_eq!(tasks, 0);
}

#[tokio::test]
async fn test_owner_cannot_be_added_as_member() {
    let (state, _storage) = create_test_state().await;
    let (alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Solo" }),
        ))
        .await
        .unwrap();
    let board_id = response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/members", board_id),
            Some(&alice),
            json!({ "user_id": alice_id.to_string() }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_notifications_mark_read_and_read_all() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let (bob_id, bob) = create_test_user(&state, "bob", "bob@example.com").await;
    let app = test_router(state.clone());

    // Two boards, two invitations for bob
    for title in ["One", "Two"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/boards",
                Some(&alice),
                json!({ "title": title }),
            ))
            .await
            .unwrap();
        let board_id = response_json(response).await["board"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/boards/{}/members", board_id),
                Some(&alice),
                json!({ "user_id": bob_id.to_string() }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/notifications", Some(&bob)))
        .await
        .unwrap();
    let body = response_json(response).await;
    let notifications = body["notifications"].as_array().unwrap().clone();
    assert_eq!(notifications.len(), 2);
    let first_id = notifications[0]["id"].as_str().unwrap().to_string();

    // Alice cannot read bob's notification
    let response = app
        .clone()
        .oneshot(bare_request(
            "PUT",
            &format!("/api/notifications/{}/read", first_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(bare_request(
            "PUT",
            &format!("/api/notifications/{}/read", first_id),
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["notification"]["is_read"], true);

    let response = app
        .oneshot(bare_request(
            "PUT",
            "/api/notifications/read-all",
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["updated"], 1);
}

#[tokio::test]
async fn test_labels_live_on_the_board() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&alice),
            json!({ "title": "Labelled" }),
        ))
        .await
        .unwrap();
    let board_id = response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/labels", board_id),
            Some(&alice),
            json!({ "name": "bug", "color": "#ff0000" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let label_id = response_json(response).await["label"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/boards/{}/labels", board_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["labels"].as_array().unwrap().len(), 1);

    let response = app
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/labels/{}", label_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
