use crate::{ApiError, ApiResult};

use tb_core::{Message, User};
use tb_db::SqliteRepository;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Send a direct message. The recipient must exist.
pub async fn send(
    pool: &SqlitePool,
    sender_id: Uuid,
    recipient_id: Uuid,
    content: String,
) -> ApiResult<Message> {
    if content.trim().is_empty() {
        return Err(ApiError::validation("Message content cannot be empty"));
    }

    let users = SqliteRepository::<User>::new(pool.clone());
    if !users.exists(&recipient_id).await? {
        return Err(ApiError::not_found(format!(
            "User {} not found",
            recipient_id
        )));
    }

    let messages = SqliteRepository::<Message>::new(pool.clone());
    let message = Message::new(sender_id, recipient_id, content);
    messages.add(&message).await?;

    Ok(message)
}

/// Both directions of the conversation between two users, oldest first.
pub async fn conversation(
    pool: &SqlitePool,
    user_id: Uuid,
    peer_id: Uuid,
) -> ApiResult<Vec<Message>> {
    let messages = SqliteRepository::<Message>::new(pool.clone());
    let mut query = messages.select();
    query
        .push(" WHERE (sender_id = ")
        .push_bind(user_id.to_string())
        .push(" AND recipient_id = ")
        .push_bind(peer_id.to_string())
        .push(") OR (sender_id = ")
        .push_bind(peer_id.to_string())
        .push(" AND recipient_id = ")
        .push_bind(user_id.to_string())
        .push(") ORDER BY created_at ASC");

    Ok(messages.fetch_all(&mut query).await?)
}

/// Record the read timestamp. Only the recipient may do this; re-reading
/// keeps the original timestamp.
pub async fn mark_read(pool: &SqlitePool, id: Uuid, user_id: Uuid) -> ApiResult<Message> {
    let messages = SqliteRepository::<Message>::new(pool.clone());
    let mut message = messages
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Message {} not found", id)))?;

    if message.recipient_id != user_id {
        return Err(ApiError::forbidden("Not your message"));
    }

    if message.read_at.is_none() {
        message.read_at = Some(Utc::now());
        messages.update(&message).await?;
    }

    Ok(message)
}
