use crate::{ApiError, ApiResult};

use tb_core::{Notification, NotificationKind};
use tb_db::SqliteRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a notification. Used by the other services when something
/// happens that the recipient should hear about.
pub async fn notify(
    pool: &SqlitePool,
    recipient_id: Uuid,
    kind: NotificationKind,
    content: String,
    related_id: Option<Uuid>,
) -> ApiResult<Notification> {
    let notifications = SqliteRepository::<Notification>::new(pool.clone());
    let notification = Notification::new(recipient_id, kind, content, related_id);
    notifications.add(&notification).await?;

    Ok(notification)
}

/// The user's notifications, unread first, newest within each group.
pub async fn list_for_user(pool: &SqlitePool, user_id: Uuid) -> ApiResult<Vec<Notification>> {
    let notifications = SqliteRepository::<Notification>::new(pool.clone());
    let mut query = notifications.select();
    query
        .push(" WHERE recipient_id = ")
        .push_bind(user_id.to_string())
        .push(" ORDER BY is_read ASC, created_at DESC");

    Ok(notifications.fetch_all(&mut query).await?)
}

/// Mark one notification read. Only the recipient may do this.
pub async fn mark_read(pool: &SqlitePool, id: Uuid, user_id: Uuid) -> ApiResult<Notification> {
    let notifications = SqliteRepository::<Notification>::new(pool.clone());
    let mut notification = notifications
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Notification {} not found", id)))?;

    if notification.recipient_id != user_id {
        return Err(ApiError::forbidden("Not your notification"));
    }

    if !notification.is_read {
        notification.is_read = true;
        notifications.update(&notification).await?;
    }

    Ok(notification)
}

/// Mark everything read for the user; returns how many rows changed.
pub async fn mark_all_read(pool: &SqlitePool, user_id: Uuid) -> ApiResult<u64> {
    let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE recipient_id = ? AND is_read = 0")
        .bind(user_id.to_string())
        .execute(pool)
        .await
        .map_err(tb_db::DbError::from)?;

    Ok(result.rows_affected())
}
