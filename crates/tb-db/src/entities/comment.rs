use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Comment, Task};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Comment {
    type Id = Uuid;

    const TABLE: &'static str = "comments";
    const COLUMNS: &'static [&'static str] =
        &["id", "task_id", "author_id", "content", "created_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            task_id: row::uuid_col(r, "task_id")?,
            author_id: row::uuid_col(r, "author_id")?,
            content: r.try_get("content")?,
            created_at: row::ts_col(r, "created_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.task_id.to_string())
            .bind(self.author_id.to_string())
            .bind(self.content.as_str())
            .bind(self.created_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.task_id.to_string())
            .bind(self.author_id.to_string())
            .bind(self.content.as_str())
            .bind(self.created_at.timestamp())
            .bind(self.id.to_string())
    }
}

impl ChildOf<Task> for Comment {
    const PARENT_FK: &'static str = "task_id";
    const ORDER_BY: Option<&'static str> = Some("created_at ASC");
}
