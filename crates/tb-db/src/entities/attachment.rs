use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Attachment, Task};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Attachment {
    type Id = Uuid;

    const TABLE: &'static str = "attachments";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "task_id",
        "uploader_id",
        "file_name",
        "file_path",
        "file_size",
        "content_type",
        "uploaded_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            task_id: row::uuid_col(r, "task_id")?,
            uploader_id: row::uuid_col(r, "uploader_id")?,
            file_name: r.try_get("file_name")?,
            file_path: r.try_get("file_path")?,
            file_size: r.try_get("file_size")?,
            content_type: r.try_get("content_type")?,
            uploaded_at: row::ts_col(r, "uploaded_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.task_id.to_string())
            .bind(self.uploader_id.to_string())
            .bind(self.file_name.as_str())
            .bind(self.file_path.as_str())
            .bind(self.file_size)
            .bind(self.content_type.as_str())
            .bind(self.uploaded_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.task_id.to_string())
            .bind(self.uploader_id.to_string())
            .bind(self.file_name.as_str())
            .bind(self.file_path.as_str())
            .bind(self.file_size)
            .bind(self.content_type.as_str())
            .bind(self.uploaded_at.timestamp())
            .bind(self.id.to_string())
    }
}

impl ChildOf<Task> for Attachment {
    const PARENT_FK: &'static str = "task_id";
    const ORDER_BY: Option<&'static str> = Some("uploaded_at ASC");
}
