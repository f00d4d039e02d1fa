pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;
pub mod state;

pub use api::{
    account::{
        login_request::LoginRequest, login_response::LoginResponse,
        register_request::RegisterRequest, user_dto::UserDto, user_response::UserResponse,
    },
    attachments::{
        attachment_dto::AttachmentDto, attachment_list_response::AttachmentListResponse,
        attachment_response::AttachmentResponse,
    },
    boards::{
        add_member_request::AddMemberRequest,
        board_detail_response::{BoardDetailResponse, ListWithTasksDto},
        board_dto::BoardDto,
        board_list_response::BoardListResponse,
        board_response::BoardResponse,
        create_board_request::CreateBoardRequest,
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        member_response::MemberResponse,
        update_board_request::UpdateBoardRequest,
        update_member_request::UpdateMemberRequest,
    },
    checklists::{
        checklist_dto::ChecklistDto, checklist_item_dto::ChecklistItemDto,
        checklist_item_response::ChecklistItemResponse,
        checklist_list_response::ChecklistListResponse, checklist_response::ChecklistResponse,
        checklist_with_items_dto::ChecklistWithItemsDto,
        create_checklist_item_request::CreateChecklistItemRequest,
        create_checklist_request::CreateChecklistRequest,
        update_checklist_item_request::UpdateChecklistItemRequest,
    },
    comments::{
        comment_dto::CommentDto, comment_list_response::CommentListResponse,
        comment_response::CommentResponse, create_comment_request::CreateCommentRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    labels::{
        create_label_request::CreateLabelRequest, label_dto::LabelDto,
        label_list_response::LabelListResponse, label_response::LabelResponse,
    },
    lists::{
        create_list_request::CreateListRequest, list_collection_response::ListCollectionResponse,
        list_dto::ListDto, list_response::ListResponse, update_list_request::UpdateListRequest,
    },
    messages::{
        message_dto::MessageDto, message_list_response::MessageListResponse,
        message_response::MessageResponse, send_message_request::SendMessageRequest,
    },
    notifications::{
        mark_all_read_response::MarkAllReadResponse, notification_dto::NotificationDto,
        notification_list_response::NotificationListResponse,
        notification_response::NotificationResponse,
    },
    tasks::{
        add_assignee_request::AddAssigneeRequest, assignee_dto::AssigneeDto,
        assignee_response::AssigneeResponse,
        create_task_request::CreateTaskRequest, move_task_request::MoveTaskRequest,
        task_detail_response::TaskDetailResponse, task_dto::TaskDto,
        task_list_response::TaskListResponse, task_response::TaskResponse,
        update_task_request::UpdateTaskRequest,
    },
};

pub use crate::error::ServerError;
pub use crate::routes::build_router;
pub use crate::state::AppState;
