use crate::Result as DbErrorResult;
use crate::entity::{Entity, SqliteQuery};
use crate::row;

use tb_core::Notification;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Notification {
    type Id = Uuid;

    const TABLE: &'static str = "notifications";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "recipient_id",
        "kind",
        "content",
        "is_read",
        "related_id",
        "created_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            recipient_id: row::uuid_col(r, "recipient_id")?,
            kind: row::parsed_col(r, "kind")?,
            content: r.try_get("content")?,
            is_read: r.try_get("is_read")?,
            related_id: row::opt_uuid_col(r, "related_id")?,
            created_at: row::ts_col(r, "created_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.recipient_id.to_string())
            .bind(self.kind.as_str())
            .bind(self.content.as_str())
            .bind(self.is_read)
            .bind(self.related_id.map(|u| u.to_string()))
            .bind(self.created_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.recipient_id.to_string())
            .bind(self.kind.as_str())
            .bind(self.content.as_str())
            .bind(self.is_read)
            .bind(self.related_id.map(|u| u.to_string()))
            .bind(self.created_at.timestamp())
            .bind(self.id.to_string())
    }
}
