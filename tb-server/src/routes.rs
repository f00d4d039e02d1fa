use crate::api::{
    account::account, attachments::attachments, boards::boards, checklists::checklists,
    comments::comments, labels::labels, lists::lists, messages::messages,
    notifications::notifications, tasks::tasks,
};
use crate::health;
use crate::state::AppState;

use tb_config::CorsConfig;

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Account
        .route("/api/account/register", post(account::register))
        .route("/api/account/login", post(account::login))
        .route("/api/account/photo", post(account::upload_photo))
        // Boards
        .route(
            "/api/boards",
            get(boards::list_boards).post(boards::create_board),
        )
        .route(
            "/api/boards/{id}",
            get(boards::get_board)
                .put(boards::update_board)
                .delete(boards::delete_board),
        )
        .route(
            "/api/boards/{id}/members",
            get(boards::list_members).post(boards::add_member),
        )
        .route(
            "/api/boards/{id}/members/{user_id}",
            put(boards::update_member).delete(boards::remove_member),
        )
        // Labels
        .route(
            "/api/boards/{id}/labels",
            get(labels::list_labels).post(labels::create_label),
        )
        .route("/api/labels/{id}", delete(labels::delete_label))
        // Lists
        .route(
            "/api/boards/{id}/lists",
            get(lists::list_lists).post(lists::create_list),
        )
        .route(
            "/api/lists/{id}",
            put(lists::update_list).delete(lists::delete_list),
        )
        .route(
            "/api/lists/{id}/tasks",
            get(lists::list_tasks).post(lists::create_task),
        )
        // Tasks
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/api/tasks/{id}/move", post(tasks::move_task))
        .route("/api/tasks/{id}/assignees", post(tasks::add_assignee))
        .route(
            "/api/tasks/{id}/assignees/{user_id}",
            delete(tasks::remove_assignee),
        )
        .route(
            "/api/tasks/{id}/labels/{label_id}",
            put(tasks::attach_label).delete(tasks::detach_label),
        )
        // Comments
        .route(
            "/api/tasks/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/comments/{id}",
            delete(comments::delete_comment),
        )
        // Attachments
        .route(
            "/api/tasks/{id}/attachments",
            get(attachments::list_attachments).post(attachments::upload_attachment),
        )
        .route(
            "/api/attachments/{id}",
            delete(attachments::delete_attachment),
        )
        // Checklists
        .route(
            "/api/tasks/{id}/checklists",
            get(checklists::list_checklists).post(checklists::create_checklist),
        )
        .route(
            "/api/checklists/{id}",
            delete(checklists::delete_checklist),
        )
        .route("/api/checklists/{id}/items", post(checklists::create_item))
        .route(
            "/api/checklist-items/{id}",
            put(checklists::update_item).delete(checklists::delete_item),
        )
        // Notifications
        .route("/api/notifications", get(notifications::list_notifications))
        .route(
            "/api/notifications/{id}/read",
            put(notifications::mark_read),
        )
        .route(
            "/api/notifications/read-all",
            put(notifications::mark_all_read),
        )
        // Messages
        .route("/api/messages", post(messages::send_message))
        .route("/api/messages/{id}", get(messages::get_conversation))
        .route("/api/messages/{id}/read", put(messages::mark_read))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(cors_layer(cors))
}

/// An empty origin list means any origin is accepted.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = if cors.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            cors.allowed_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
