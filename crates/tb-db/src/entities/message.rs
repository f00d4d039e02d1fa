use crate::Result as DbErrorResult;
use crate::entity::{Entity, SqliteQuery};
use crate::row;

use tb_core::Message;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Message {
    type Id = Uuid;

    const TABLE: &'static str = "messages";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "sender_id",
        "recipient_id",
        "content",
        "created_at",
        "read_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            sender_id: row::uuid_col(r, "sender_id")?,
            recipient_id: row::uuid_col(r, "recipient_id")?,
            content: r.try_get("content")?,
            created_at: row::ts_col(r, "created_at")?,
            read_at: row::opt_ts_col(r, "read_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.sender_id.to_string())
            .bind(self.recipient_id.to_string())
            .bind(self.content.as_str())
            .bind(self.created_at.timestamp())
            .bind(self.read_at.map(|t| t.timestamp()))
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.sender_id.to_string())
            .bind(self.recipient_id.to_string())
            .bind(self.content.as_str())
            .bind(self.created_at.timestamp())
            .bind(self.read_at.map(|t| t.timestamp()))
            .bind(self.id.to_string())
    }
}
