use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Checklist, Task};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Checklist {
    type Id = Uuid;

    const TABLE: &'static str = "checklists";
    const COLUMNS: &'static [&'static str] = &["id", "task_id", "title", "position"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            task_id: row::uuid_col(r, "task_id")?,
            title: r.try_get("title")?,
            position: r.try_get("position")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.task_id.to_string())
            .bind(self.title.as_str())
            .bind(self.position)
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.task_id.to_string())
            .bind(self.title.as_str())
            .bind(self.position)
            .bind(self.id.to_string())
    }
}

impl ChildOf<Task> for Checklist {
    const PARENT_FK: &'static str = "task_id";
    const ORDER_BY: Option<&'static str> = Some("position ASC");
}
