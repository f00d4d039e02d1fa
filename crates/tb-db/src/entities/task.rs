use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{List, Task};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Task {
    type Id = Uuid;

    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "list_id",
        "title",
        "description",
        "due_date",
        "priority",
        "status",
        "position",
        "owner_id",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            list_id: row::uuid_col(r, "list_id")?,
            title: r.try_get("title")?,
            description: r.try_get("description")?,
            due_date: row::opt_ts_col(r, "due_date")?,
            priority: row::parsed_col(r, "priority")?,
            status: row::parsed_col(r, "status")?,
            position: r.try_get("position")?,
            owner_id: row::uuid_col(r, "owner_id")?,
            created_at: row::ts_col(r, "created_at")?,
            updated_at: row::ts_col(r, "updated_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.list_id.to_string())
            .bind(self.title.as_str())
            .bind(self.description.as_deref())
            .bind(self.due_date.map(|t| t.timestamp()))
            .bind(self.priority.as_str())
            .bind(self.status.as_str())
            .bind(self.position)
            .bind(self.owner_id.to_string())
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.list_id.to_string())
            .bind(self.title.as_str())
            .bind(self.description.as_deref())
            .bind(self.due_date.map(|t| t.timestamp()))
            .bind(self.priority.as_str())
            .bind(self.status.as_str())
            .bind(self.position)
            .bind(self.owner_id.to_string())
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
            .bind(self.id.to_string())
    }
}

impl ChildOf<List> for Task {
    const PARENT_FK: &'static str = "list_id";
    const ORDER_BY: Option<&'static str> = Some("position ASC");
}
