//! Integration tests for task handlers
mod common;

use crate::common::{
    bare_request, create_test_state, create_test_user, json_request, response_json, test_router,
};

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

async fn create_board(app: &Router, token: &str, title: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(token),
            json!({ "title": title }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["board"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_list(app: &Router, token: &str, board_id: &str, title: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/lists", board_id),
            Some(token),
            json!({ "title": title }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["list"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_task(app: &Router, token: &str, list_id: &str, title: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/lists/{}/tasks", list_id),
            Some(token),
            json!({ "title": title }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await["task"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_task_lifecycle() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let board_id = create_board(&app, &alice, "Work").await;
    let list_id = create_list(&app, &alice, &board_id, "Todo").await;
    let task_id = create_task(&app, &alice, &list_id, "Write report").await;

    // Update status and priority
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", task_id),
            Some(&alice),
            json!({ "status": "in_progress", "priority": "high" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["task"]["status"], "in_progress");
    assert_eq!(body["task"]["priority"], "high");

    // Detail carries empty collections
    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/tasks/{}", task_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["task"]["title"], "Write report");
    assert_eq!(body["comments"].as_array().unwrap().len(), 0);
    assert_eq!(body["checklists"].as_array().unwrap().len(), 0);

    // Delete
    let response = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/tasks/{}", task_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/tasks/{}", task_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_status_is_rejected() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let board_id = create_board(&app, &alice, "Work").await;
    let list_id = create_list(&app, &alice, &board_id, "Todo").await;
    let task_id = create_task(&app, &alice, &list_id, "Task").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/tasks/{}", task_id),
            Some(&alice),
            json!({ "status": "someday" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_task_within_board() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let board_id = create_board(&app, &alice, "Work").await;
    let todo = create_list(&app, &alice, &board_id, "Todo").await;
    let done = create_list(&app, &alice, &board_id, "Done").await;
    let task_id = create_task(&app, &alice, &todo, "Ship it").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/tasks/{}/move", task_id),
            Some(&alice),
            json!({ "list_id": done }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["task"]["list_id"], done);

    // The source list no longer holds it
    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/lists/{}/tasks", todo),
            Some(&alice),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["tasks"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_move_task_across_boards_is_rejected() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let board_a = create_board(&app, &alice, "A").await;
    let board_b = create_board(&app, &alice, "B").await;
    let list_a = create_list(&app, &alice, &board_a, "Todo").await;
    let list_b = create_list(&app, &alice, &board_b, "Todo").await;
    let task_id = create_task(&app, &alice, &list_a, "Stuck").await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/tasks/{}/move", task_id),
            Some(&alice),
            json!({ "list_id": list_b }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comment_notifies_task_owner() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let (bob_id, bob) = create_test_user(&state, "bob", "bob@example.com").await;
    let app = test_router(state.clone());

    let board_id = create_board(&app, &alice, "Work").await;
    let list_id = create_list(&app, &alice, &board_id, "Todo").await;
    let task_id = create_task(&app, &alice, &list_id, "Review").await;

    // Bob joins and comments on Alice's task
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

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/tasks/{}/comments", task_id),
            Some(&bob),
            json!({ "content": "Looks good" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(bare_request("GET", "/api/notifications", Some(&alice)))
        .await
        .unwrap();
    let body = response_json(response).await;
    let kinds: Vec<&str> = body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"comment"));
}

#[tokio::test]
async fn test_label_from_another_board_is_rejected() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let board_a = create_board(&app, &alice, "A").await;
    let board_b = create_board(&app, &alice, "B").await;
    let list_a = create_list(&app, &alice, &board_a, "Todo").await;
    let task_id = create_task(&app, &alice, &list_a, "Tagged").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/boards/{}/labels", board_b),
            Some(&alice),
            json!({ "name": "elsewhere", "color": "#00ff00" }),
        ))
        .await
        .unwrap();
    let label_id = response_json(response).await["label"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(bare_request(
            "PUT",
            &format!("/api/tasks/{}/labels/{}", task_id, label_id),
            Some(&alice),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checklist_item_check_records_user() {
    let (state, _storage) = create_test_state().await;
    let (alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let app = test_router(state.clone());

    let board_id = create_board(&app, &alice, "Work").await;
    let list_id = create_list(&app, &alice, &board_id, "Todo").await;
    let task_id = create_task(&app, &alice, &list_id, "With checklist").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/tasks/{}/checklists", task_id),
            Some(&alice),
            json!({ "title": "Steps" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let checklist_id = response_json(response).await["checklist"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/checklists/{}/items", checklist_id),
            Some(&alice),
            json!({ "content": "First step" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let item_id = response_json(response).await["item"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/checklist-items/{}", item_id),
            Some(&alice),
            json!({ "is_checked": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["item"]["is_checked"], true);
    assert_eq!(body["item"]["completed_by"], alice_id.to_string());

    // Unchecking clears the completion record
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/checklist-items/{}", item_id),
            Some(&alice),
            json!({ "is_checked": false }),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["item"]["is_checked"], false);
    assert!(body["item"]["completed_by"].is_null());
}

#[tokio::test]
async fn test_assignee_must_have_board_access() {
    let (state, _storage) = create_test_state().await;
    let (_alice_id, alice) = create_test_user(&state, "alice", "alice@example.com").await;
    let (outsider_id, _outsider) = create_test_user(&state, "eve", "eve@example.com").await;
    let app = test_router(state.clone());

    let board_id = create_board(&app, &alice, "Work").await;
    let list_id = create_list(&app, &alice, &board_id, "Todo").await;
    let task_id = create_task(&app, &alice, &list_id, "Unassignable").await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/tasks/{}/assignees", task_id),
            Some(&alice),
            json!({ "user_id": outsider_id.to_string() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
