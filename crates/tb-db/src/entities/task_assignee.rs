use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Task, TaskAssignee};

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for TaskAssignee {
    type Id = Uuid;

    const TABLE: &'static str = "task_assignees";
    const COLUMNS: &'static [&'static str] = &["id", "task_id", "user_id"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            task_id: row::uuid_col(r, "task_id")?,
            user_id: row::uuid_col(r, "user_id")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.task_id.to_string())
            .bind(self.user_id.to_string())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.task_id.to_string())
            .bind(self.user_id.to_string())
            .bind(self.id.to_string())
    }
}

impl ChildOf<Task> for TaskAssignee {
    const PARENT_FK: &'static str = "task_id";
}
