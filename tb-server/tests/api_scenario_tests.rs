//! End-to-end flow: register, log in, build a board and find the task
//! again through the board detail view.
mod common;

use crate::common::{bare_request, create_test_state, json_request, response_json, test_router};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_full_board_setup_flow() {
    let (state, _storage) = create_test_state().await;
    let app = test_router(state.clone());

    // Register and log in
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/account/register",
            None,
            json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "password123"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/account/login",
            None,
            json!({ "email": "alice@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = response_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    // Board, list, task
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/boards",
            Some(&token),
            json!({ "title": "Sprint 1" }),
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
            Some(&token),
            json!({ "title": "Todo" }),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["list"]["position"], 0);
    let list_id = body["list"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/lists/{}/tasks", list_id),
            Some(&token),
            json!({ "title": "Write spec" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Board detail shows exactly one list holding exactly one task
    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/boards/{}", board_id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["board"]["title"], "Sprint 1");
    let lists = body["lists"].as_array().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0]["list"]["title"], "Todo");
    let tasks = lists[0]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Write spec");
}

#[tokio::test]
async fn test_direct_messages_between_two_users() {
    let (state, _storage) = create_test_state().await;
    let (alice_id, alice) =
        crate::common::create_test_user(&state, "alice", "alice@example.com").await;
    let (bob_id, bob) = crate::common::create_test_user(&state, "bob", "bob@example.com").await;
    let app = test_router(state.clone());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/messages",
            Some(&alice),
            json!({ "recipient_id": bob_id.to_string(), "content": "Hello Bob" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let message_id = response_json(response).await["message"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/messages",
            Some(&bob),
            json!({ "recipient_id": alice_id.to_string(), "content": "Hi Alice" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Both directions appear in the conversation, oldest first
    let response = app
        .clone()
        .oneshot(bare_request(
            "GET",
            &format!("/api/messages/{}", bob_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    let body = response_json(response).await;
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"], "Hello Bob");
    assert_eq!(messages[1]["content"], "Hi Alice");

    // Only the recipient can mark a message read
    let response = app
        .clone()
        .oneshot(bare_request(
            "PUT",
            &format!("/api/messages/{}/read", message_id),
            Some(&alice),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(bare_request(
            "PUT",
            &format!("/api/messages/{}/read", message_id),
            Some(&bob),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["message"]["read_at"].is_number());
}
